use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(default = "h-4 w-4")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("animate-spin text-muted-foreground {size}")
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
            ></path>
        </svg>
    }
}
