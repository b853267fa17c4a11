use crate::BASE_URL;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="leading-tight flex flex-row items-center">
            <A
                exact=true
                strict_trailing_slash=false
                href=format!("{BASE_URL}/trade")
                attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none"
            >
                "Trade"
            </A>
            <a
                href="https://aptos.dev"
                target="_blank"
                rel="noopener"
                class="text-muted-foreground px-3 py-1.5 no-underline leading-none"
            >
                "Docs"
            </a>
        </nav>
    }
}
