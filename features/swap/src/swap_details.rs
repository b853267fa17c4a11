use aptoswap_sdk::{Percent, Trade, TradeType};
use leptos::{ev, html, prelude::*};
use lucide_leptos::ChevronDown;
use tracing::info;

#[component]
pub fn SwapDetails(
    #[prop(into)] trade: Signal<Option<Trade>>,
    allowed_slippage: Percent,
) -> impl IntoView {
    info!("rendering <SwapDetails/>");

    on_cleanup(move || {
        info!("cleaning up <SwapDetails/>");
    });

    let (expanded, set_expanded) = signal(false);

    let content_ref = NodeRef::<html::Div>::new();

    let toggle_expand = move |_: ev::MouseEvent| {
        if let Some(content) = content_ref.get() {
            let full_height = content.scroll_height();

            if expanded.get() {
                // collapsing needs an explicit starting height to animate from
                content.style(("height", format!("{}px", full_height)));
                request_animation_frame(move || {
                    content.style(("height", "0px"));
                });
            } else {
                content.style(("height", "0px"));
                request_animation_frame(move || {
                    content.style(("height", format!("{}px", full_height)));
                });
            }
        }
        set_expanded.update(|e| *e = !*e);
    };

    let price = move || {
        trade.get().and_then(|trade| {
            trade.execution_price().map(|price| {
                format!(
                    "1 {} = {:.6} {}",
                    trade.input_amount.coin, price, trade.output_amount.coin
                )
            })
        })
    };

    // the slippage-adjusted side of the trade
    let limit = move || {
        trade.get().map(|trade| match trade.trade_type {
            TradeType::ExactInput => (
                "Minimum Received:",
                trade.minimum_amount_out(allowed_slippage).to_string(),
            ),
            TradeType::ExactOutput => (
                "Maximum Sold:",
                trade.maximum_amount_in(allowed_slippage).to_string(),
            ),
        })
    };

    let route = move || {
        trade
            .get()
            .map(|trade| format!("{} > {}", trade.input_amount.coin, trade.output_amount.coin))
    };

    view! {
        <div class="flex flex-col w-full rounded-md box-border border border-solid border-border">
            <div
                class="min-h-[40px] px-4 flex items-center justify-between cursor-pointer"
                on:click=toggle_expand
            >
                <p class="m-0 text-sm text-white font-semibold">{price}</p>
                <div
                    class="flex items-center justify-center transition-transform"
                    class=("rotate-180", move || expanded.get())
                >
                    <ChevronDown size=20 />
                </div>
            </div>

            <div
                node_ref=content_ref
                class="transition-all ease-standard box-border overflow-hidden"
                class=(["opacity-0", "invisible", "h-0"], move || !expanded.get())
                class=(["opacity-100", "visible"], move || expanded.get())
            >
                <div class="w-full box-border p-4 pt-2 flex flex-col gap-2 items-center">
                    <div class="w-full flex flex-row justify-between text-sm">
                        <p class="m-0 text-muted-foreground">
                            {move || limit().map(|(label, _)| label)}
                        </p>
                        <p class="m-0 text-foreground font-semibold">
                            {move || limit().map(|(_, amount)| amount)}
                        </p>
                    </div>
                    <div class="w-full flex flex-row justify-between text-sm">
                        <p class="m-0 text-muted-foreground">"Slippage Tolerance:"</p>
                        <p class="m-0 text-foreground font-semibold">
                            {allowed_slippage.to_string()}
                        </p>
                    </div>
                    <div class="w-full flex flex-row justify-between text-sm">
                        <p class="m-0 text-muted-foreground">"Route:"</p>
                        <p class="m-0 text-foreground font-semibold">{route}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
