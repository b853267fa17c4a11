use aptoswap_core::WalletSignals;
use aptoswap_sdk::CoinAmount;
use leptos::{either::EitherOf3, prelude::*};
use tracing::info;

/// Shows the balance of one side of the swap. Clicking it fills the amount field.
#[component]
pub fn CoinBalance(
    #[prop(into)] balance: Signal<Option<CoinAmount>>,
    #[prop(optional, into)] on_max: Option<Callback<CoinAmount>>,
) -> impl IntoView {
    info!("rendering <CoinBalance/>");

    on_cleanup(move || {
        info!("cleaning up <CoinBalance/>");
    });

    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");

    view! {
        <div class="coin-balance">
            {move || match (wallet.is_connected(), balance.get()) {
                (false, _) => {
                    EitherOf3::A(
                        view! {
                            <div
                                title="Connect a wallet to see balances"
                                class="py-0 px-2 cursor-default text-ellipsis text-sm"
                            >
                                "Balance: 👀"
                            </div>
                        },
                    )
                }
                (true, None) => EitherOf3::B(()),
                (true, Some(amount)) => {
                    let exact = amount.to_exact();
                    EitherOf3::C(
                        view! {
                            <div
                                on:click=move |_| {
                                    if let Some(on_max) = on_max {
                                        on_max.run(amount.clone());
                                    }
                                }
                                class="py-0 px-2 text-sm text-neutral-500 hover:text-neutral-400 rounded cursor-default transition-all duration-200 ease-standard"
                            >
                                <span>"Balance: "</span>
                                <span class="text-white font-medium">{exact}</span>
                            </div>
                        },
                    )
                }
            }}
        </div>
    }
}
