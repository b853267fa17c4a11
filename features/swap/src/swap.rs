use crate::{
    actions::use_swap_action_handlers,
    hooks::{use_default_from_url, use_derived_swap_info, use_swap_state},
    state::Field,
    SwapDetails,
};
use aptoswap_components::{CoinBalance, Spinner};
use aptoswap_core::{utils::alert, CoinMap, ALLOWED_SLIPPAGE};
use aptoswap_sdk::{Coin, CoinAmount, TradeState};
use leptos::{ev, prelude::*};
use lucide_leptos::ArrowDownUp;
use tracing::{debug, info};

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    let coin_map = use_context::<CoinMap>().expect("coin map context missing!");

    let store = use_swap_state();
    let handlers = use_swap_action_handlers();
    let defaults = use_default_from_url();
    let derived = use_derived_swap_info();

    Effect::new(move || {
        if let Some(defaults) = defaults.get() {
            debug!("defaults from url: {defaults:?}");
        }
    });

    let mut coins: Vec<Coin> = coin_map.values().cloned().collect();
    // native coin first, then alphabetical
    coins.sort_by_key(|coin| (!coin.is_native(), coin.symbol.clone()));
    let coins = StoredValue::new(coins);

    let typed_value = Memo::new(move |_| store.with(|state| state.typed_value.clone()));
    let currency_id = move |field: Field| {
        store.with(|state| state.currency_id(field).map(str::to_owned).unwrap_or_default())
    };
    let amount = move |field: Field| {
        derived.with(|info| info.formatted_amount(field, &typed_value.get()))
    };

    let select_coin = move |field: Field, ev: ev::Event| {
        let address = event_target_value(&ev);
        if let Some(coin) = coin_map.coin(Some(&address)) {
            handlers.on_coin_selection(field, &coin);
        }
    };
    let select_coin_x = select_coin.clone();
    let select_coin_y = select_coin;

    let max_input = Callback::new(move |balance: CoinAmount| {
        handlers.on_user_input(Field::Input, balance.to_exact());
    });

    let input_balance =
        Signal::derive(move || derived.with(|info| info.coin_balances.input.clone()));
    let output_balance =
        Signal::derive(move || derived.with(|info| info.coin_balances.output.clone()));

    let trade_state = Memo::new(move |_| derived.with(|info| info.trade.state));
    let trade = Signal::derive(move || derived.with(|info| info.trade.trade.clone()));

    let (show_recipient, set_show_recipient) = signal(false);

    let toggle_recipient = move |_: ev::MouseEvent| {
        if show_recipient.get() {
            handlers.on_change_recipient(None);
        }
        set_show_recipient.update(|show| *show = !*show);
    };

    let button_label = move || {
        derived.with(|info| match info.input_error {
            Some(error) => error.to_string(),
            None => "Swap".to_string(),
        })
    };
    let swap_disabled = move || {
        derived.with(|info| info.input_error.is_some() || info.trade.state != TradeState::Valid)
    };

    let handle_swap = move |_: ev::MouseEvent| {
        let summary = derived.with_untracked(|info| {
            info.trade.trade.as_ref().map(|trade| {
                format!(
                    "Swap {} for {} to {}",
                    trade.input_amount,
                    trade.output_amount,
                    info.to.clone().unwrap_or_default()
                )
            })
        });
        if let Some(summary) = summary {
            info!("{summary}");
            alert(format!("{summary}\n\nSubmitting transactions is not supported yet."));
        }
    };

    let coin_options = move || {
        coins
            .get_value()
            .into_iter()
            .map(|coin| view! { <option value=coin.address.clone()>{coin.symbol}</option> })
            .collect_view()
    };

    view! {
        <div class="absolute inset-0 m-auto flex items-center justify-center">
            <div class="grid gap-4 grid-cols-1 max-w-sm md:-translate-y-[54px]">
                <div class="rounded-lg shadow-sm bg-card text-card-foreground border border-solid border-border">
                    // card header
                    <div class="p-6 flex justify-between items-center">
                        <h2 class="m-0">Swap</h2>
                        <button
                            on:click=toggle_recipient
                            class="text-sm text-muted-foreground rounded-md border border-solid border-border px-3 h-8"
                        >
                            {move || {
                                if show_recipient.get() { "Remove recipient" } else { "Add recipient" }
                            }}
                        </button>
                    </div>
                    // card body
                    <div class="px-6 pb-6 space-y-4">
                        <div class="space-y-2">
                            <div class="flex items-center justify-between">
                                <label class="block text-sm font-medium" for="from-coin">
                                    "From"
                                </label>
                                <CoinBalance balance=input_balance on_max=max_input />
                            </div>
                            <div class="flex justify-between gap-4 h-9">
                                <input
                                    id="from-coin"
                                    type="text"
                                    pattern="^[0-9]*[.,]?[0-9]*$"
                                    inputmode="decimal"
                                    placeholder="0.0"
                                    autocomplete="off"
                                    class="px-3 py-1 w-full text-sm rounded-md font-normal"
                                    prop:value=move || amount(Field::Input)
                                    on:input=move |ev| {
                                        handlers.on_user_input(Field::Input, event_target_value(&ev));
                                    }
                                />
                                <select
                                    class="w-[135px] font-medium py-2 px-4 bg-card rounded-md"
                                    title="Select input coin"
                                    prop:value=move || currency_id(Field::Input)
                                    on:change=move |ev| select_coin_x(Field::Input, ev)
                                >
                                    <option value="" disabled selected>
                                        "Select a coin"
                                    </option>
                                    {coin_options}
                                </select>
                            </div>
                        </div>
                        <div class="flex items-center gap-0.5 w-full">
                            <hr class="w-full" />
                            <button
                                type="button"
                                aria-label="change swap direction"
                                class="inline-flex items-center justify-center rounded-full border-0 min-w-[1.5rem] h-6 p-0 hover:text-primary"
                                on:click=move |_| handlers.on_switch_tokens()
                            >
                                <ArrowDownUp size=15 />
                            </button>
                            <hr class="w-full" />
                        </div>
                        <div class="space-y-2">
                            <div class="flex justify-between leading-none">
                                <label class="block text-sm font-medium" for="to-coin">
                                    "To"
                                </label>
                                <CoinBalance balance=output_balance />
                            </div>
                            <div class="flex justify-between gap-4 h-9">
                                <input
                                    id="to-coin"
                                    type="text"
                                    pattern="^[0-9]*[.,]?[0-9]*$"
                                    inputmode="decimal"
                                    placeholder="0.0"
                                    autocomplete="off"
                                    class="px-3 py-1 w-full text-sm font-normal rounded-md"
                                    prop:value=move || amount(Field::Output)
                                    on:input=move |ev| {
                                        handlers.on_user_input(Field::Output, event_target_value(&ev));
                                    }
                                />
                                <select
                                    title="Select output coin"
                                    class="w-[135px] font-medium py-2 px-4 bg-card rounded-md"
                                    prop:value=move || currency_id(Field::Output)
                                    on:change=move |ev| select_coin_y(Field::Output, ev)
                                >
                                    <option value="" disabled selected>
                                        "Select a coin"
                                    </option>
                                    {coin_options}
                                </select>
                            </div>
                        </div>

                        <Show when=move || show_recipient.get()>
                            <div class="space-y-2">
                                <label class="block text-sm font-medium" for="recipient">
                                    "Recipient"
                                </label>
                                <input
                                    id="recipient"
                                    type="text"
                                    placeholder="Address or name"
                                    autocomplete="off"
                                    class="px-3 py-1 w-full h-9 text-sm rounded-md font-normal"
                                    prop:value=move || {
                                        store.with(|state| state.recipient.clone().unwrap_or_default())
                                    }
                                    on:input=move |ev| {
                                        let recipient = event_target_value(&ev);
                                        handlers
                                            .on_change_recipient(
                                                Some(recipient).filter(|value| !value.is_empty()),
                                            );
                                    }
                                />
                            </div>
                        </Show>

                        <Show when=move || {
                            trade_state.get() == TradeState::Loading
                                && derived.with(|info| info.parsed_amount.is_some())
                        }>
                            <div class="flex flex-row items-center gap-2 text-sm text-muted-foreground">
                                <Spinner size="h-5 w-5" />
                                "Fetching best price..."
                            </div>
                        </Show>

                        <Show when=move || trade_state.get() == TradeState::Valid>
                            <SwapDetails trade allowed_slippage=ALLOWED_SLIPPAGE />
                        </Show>
                    </div>

                    // card footer
                    <div class="px-6 pb-6">
                        <button
                            class="w-full py-2 px-6 bg-primary active:brightness-90 text-primary-foreground text-sm font-medium rounded-md"
                            disabled=swap_disabled
                            on:click=handle_swap
                        >
                            {button_label}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
