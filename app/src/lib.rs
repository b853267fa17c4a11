use aptoswap_core::{
    utils::{alert, shorten_address},
    ChainId, CoinBalances, CoinMap, Error, QuoterContext, WalletSignals, NETWORK, NODE,
};
use aptoswap_swap::{provide_swap_store, SwapRoutes};
use codee::string::FromToStringCodec;
use leptos::{ev, prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use leptos_use::storage::use_local_storage;
use lucide_leptos::{Power, Wallet};
use tracing::{debug, error, info};

mod routes;
mod wallet;

use routes::{nav::Nav, trade::Trade};

pub use aptoswap_core::BASE_URL;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(ChainId::default());
    provide_context(WalletSignals::new());
    provide_context(CoinMap::default());
    provide_context(CoinBalances::new());
    provide_context(QuoterContext::default());
    provide_swap_store();

    let chain_id = use_context::<ChainId>().expect("chain id context missing!");
    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");
    let coin_map = use_context::<CoinMap>().expect("coin map context missing!");

    debug!("{} known coins on {} ({NODE})", coin_map.len(), NETWORK.as_str());

    let (was_connected, set_was_connected, _) =
        use_local_storage::<bool, FromToStringCodec>("is_wallet_connected");

    Effect::new(move |_| info!("Chain ID set to {:?}", chain_id.get()));
    Effect::new(move |_| debug!("Account: {:?}", wallet.account.get()));

    // Actions

    let connect_action: Action<(), Result<String, Error>, LocalStorage> =
        Action::new_local(move |_: &()| wallet::connect());

    Effect::new(move |_| match connect_action.value().get() {
        Some(Ok(address)) => {
            info!("connected as {address}");
            wallet.account.set(Some(address));
            set_was_connected.set(true);
        }
        Some(Err(error)) => {
            error!("{error}");
            set_was_connected.set(false);
            alert(error.to_string());
        }
        None => (),
    });

    // reconnect silently if the user connected during a previous visit
    if was_connected.get_untracked() {
        connect_action.dispatch(());
    }

    // on:click handlers

    let connect = move |_: ev::MouseEvent| {
        connect_action.dispatch(());
    };

    let disconnect = move |_: ev::MouseEvent| {
        wallet.account.set(None);
        set_was_connected.set(false);
        spawn_local(async move {
            if let Err(error) = wallet::disconnect().await {
                error!("{error}");
            }
        });
    };

    let account = move || wallet.account.get().map(shorten_address);

    view! {
        <Router>
            <header class="bg-background z-40">
                <div class="p-4 flex justify-between items-center border-b">
                    <div class="flex flex-row items-center gap-4">
                        <div class="m-0 font-bold text-2xl line-clamp-1 cursor-default">
                            "Aptoswap"
                        </div>
                        <div class="hidden sm:inline-flex">
                            <Nav />
                        </div>
                    </div>
                    <div class="flex gap-1">
                        <Show
                            when=move || wallet.is_connected()
                            fallback=move || {
                                view! {
                                    <button
                                        on:click=connect
                                        disabled=connect_action.pending()
                                        class="min-w-24 text-sm font-medium py-2 px-4 border-none
                                        bg-primary text-primary-foreground rounded-md"
                                    >
                                        <div class="h-6 flex flex-row items-center gap-2">
                                            <Wallet size=16 />
                                            "Connect Wallet"
                                        </div>
                                    </button>
                                }
                            }
                        >
                            <button
                                on:click=disconnect
                                title="Disconnect"
                                class="min-w-24 text-sm font-medium leading-none py-2 px-4 border-none
                                bg-secondary text-secondary-foreground rounded-md"
                            >
                                <div class="h-6 flex flex-row items-center gap-2">
                                    <Power size=16 />
                                    {account}
                                </div>
                            </button>
                        </Show>
                    </div>
                </div>
                <div class="sm:hidden block px-1 py-0.5 border-b">
                    <Nav />
                </div>
            </header>
            <main class="flex-1 px-2.5 lg:px-8 py-3 overflow-x-auto">
                <Routes transition=true fallback=|| "This page could not be found.">
                    <Route path=path!("aptoswap-leptos") view=Trade />
                    <SwapRoutes />
                </Routes>
            </main>
        </Router>
    }
}
