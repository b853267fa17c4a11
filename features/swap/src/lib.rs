mod actions;
mod derived;
mod hooks;
mod routes;
mod state;
mod swap;
mod swap_details;
mod url;

pub use actions::{use_swap_action_handlers, SwapActionHandlers};
pub use derived::{DerivedSwapInfo, InputError, SwapRequest};
pub use hooks::{
    fetch_best_trade, provide_swap_store, use_best_trade, use_default_from_url,
    use_derived_swap_info, use_swap_request, use_swap_state, DefaultCurrencies,
};
pub use routes::SwapRoutes;
pub use state::{CurrencySelection, Field, FieldMap, SwapAction, SwapState, SwapStore};
pub use swap::Swap;
pub use swap_details::SwapDetails;
pub use url::{query_parameters_to_swap_state, validated_recipient, SwapQuery};
