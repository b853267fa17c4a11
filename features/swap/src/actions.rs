use crate::state::{Field, SwapAction, SwapStore};
use aptoswap_sdk::Coin;
use leptos::prelude::*;
use tracing::debug;

/// Callbacks the swap widget wires to its inputs. Each one dispatches a single action.
#[derive(Copy, Clone)]
pub struct SwapActionHandlers {
    store: SwapStore,
}

impl SwapActionHandlers {
    pub fn new(store: SwapStore) -> Self {
        Self { store }
    }

    pub fn on_coin_selection(&self, field: Field, coin: &Coin) {
        debug!("selected {coin} for {field:?}");
        self.store.dispatch(SwapAction::SelectCurrency {
            field,
            currency_id: coin.address.clone(),
        });
    }

    pub fn on_switch_tokens(&self) {
        self.store.dispatch(SwapAction::SwitchCurrencies);
    }

    pub fn on_user_input(&self, field: Field, typed_value: impl Into<String>) {
        self.store.dispatch(SwapAction::TypeInput {
            field,
            typed_value: typed_value.into(),
        });
    }

    pub fn on_change_recipient(&self, recipient: Option<String>) {
        self.store.dispatch(SwapAction::SetRecipient { recipient });
    }
}

pub fn use_swap_action_handlers() -> SwapActionHandlers {
    let store = use_context::<SwapStore>().expect("swap store context missing!");
    SwapActionHandlers::new(store)
}
