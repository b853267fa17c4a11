use aptoswap_swap::Swap;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn Trade() -> impl IntoView {
    info!("rendering <Trade/>");

    on_cleanup(move || {
        info!("cleaning up <Trade/>");
    });

    view! { <Swap /> }
}
