use leptos::prelude::*;
use reactive_stores::Store;
use std::ops::{Index, IndexMut};
use tracing::debug;

/// One side of the swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Field {
    #[default]
    Input,
    Output,
}

impl Field {
    pub fn opposite(self) -> Self {
        match self {
            Field::Input => Field::Output,
            Field::Output => Field::Input,
        }
    }
}

/// A value for each side of the swap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<T> {
    pub input: T,
    pub output: T,
}

impl<T> FieldMap<T> {
    pub fn new(input: T, output: T) -> Self {
        Self { input, output }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> FieldMap<U> {
        FieldMap {
            input: f(self.input),
            output: f(self.output),
        }
    }
}

impl<T> Index<Field> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: Field) -> &Self::Output {
        match field {
            Field::Input => &self.input,
            Field::Output => &self.output,
        }
    }
}

impl<T> IndexMut<Field> for FieldMap<T> {
    fn index_mut(&mut self, field: Field) -> &mut Self::Output {
        match field {
            Field::Input => &mut self.input,
            Field::Output => &mut self.output,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencySelection {
    pub currency_id: Option<String>,
}

impl CurrencySelection {
    pub fn new(currency_id: Option<String>) -> Self {
        Self { currency_id }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Store)]
pub struct SwapState {
    /// The field the user typed into. The other field is derived from the trade.
    pub independent_field: Field,
    /// Raw user input, not validated.
    pub typed_value: String,
    pub input: CurrencySelection,
    pub output: CurrencySelection,
    /// Overrides the connected account as the receiver of the output coin.
    pub recipient: Option<String>,
}

impl SwapState {
    pub fn selection(&self, field: Field) -> &CurrencySelection {
        match field {
            Field::Input => &self.input,
            Field::Output => &self.output,
        }
    }

    fn selection_mut(&mut self, field: Field) -> &mut CurrencySelection {
        match field {
            Field::Input => &mut self.input,
            Field::Output => &mut self.output,
        }
    }

    pub fn currency_id(&self, field: Field) -> Option<&str> {
        self.selection(field).currency_id.as_deref()
    }

    pub fn currency_ids(&self) -> FieldMap<Option<&str>> {
        FieldMap::new(self.currency_id(Field::Input), self.currency_id(Field::Output))
    }

    pub fn reduce(&mut self, action: SwapAction) {
        match action {
            SwapAction::ReplaceSwapState {
                field,
                typed_value,
                input_currency_id,
                output_currency_id,
                recipient,
            } => {
                *self = SwapState {
                    independent_field: field,
                    typed_value,
                    input: CurrencySelection::new(input_currency_id),
                    output: CurrencySelection::new(output_currency_id),
                    recipient,
                };
            }
            SwapAction::SelectCurrency { field, currency_id } => {
                let other = field.opposite();
                if self.currency_id(other) == Some(currency_id.as_str()) {
                    // selecting the other side's coin swaps the sides
                    let previous = self.selection(field).currency_id.clone();
                    self.independent_field = self.independent_field.opposite();
                    self.selection_mut(field).currency_id = Some(currency_id);
                    self.selection_mut(other).currency_id = previous;
                } else {
                    self.selection_mut(field).currency_id = Some(currency_id);
                }
            }
            SwapAction::SwitchCurrencies => {
                self.independent_field = self.independent_field.opposite();
                std::mem::swap(&mut self.input, &mut self.output);
            }
            SwapAction::TypeInput { field, typed_value } => {
                self.independent_field = field;
                self.typed_value = typed_value;
            }
            SwapAction::SetRecipient { recipient } => {
                self.recipient = recipient;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapAction {
    ReplaceSwapState {
        field: Field,
        typed_value: String,
        input_currency_id: Option<String>,
        output_currency_id: Option<String>,
        recipient: Option<String>,
    },
    SelectCurrency {
        field: Field,
        currency_id: String,
    },
    SwitchCurrencies,
    TypeInput {
        field: Field,
        typed_value: String,
    },
    SetRecipient {
        recipient: Option<String>,
    },
}

/// The swap widget's client-side store.
#[derive(Copy, Clone)]
pub struct SwapStore(Store<SwapState>);

impl SwapStore {
    pub fn new(initial: SwapState) -> Self {
        Self(Store::new(initial))
    }

    /// A snapshot of the current state.
    pub fn get(&self) -> SwapState {
        self.0.get()
    }

    pub fn get_untracked(&self) -> SwapState {
        self.0.get_untracked()
    }

    pub fn with<U>(&self, f: impl FnOnce(&SwapState) -> U) -> U {
        self.0.with(f)
    }

    pub fn dispatch(&self, action: SwapAction) {
        debug!("dispatch {action:?}");
        self.0.update(|state| state.reduce(action));
    }

    pub fn store(&self) -> Store<SwapState> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SwapState {
        SwapState {
            independent_field: Field::Input,
            typed_value: "1.5".to_string(),
            input: CurrencySelection::new(Some("0x1::aptos_coin::AptosCoin".to_string())),
            output: CurrencySelection::new(Some("0xa::asset::USDC".to_string())),
            recipient: None,
        }
    }

    #[test]
    fn default_state_is_empty_with_input_independent() {
        let state = SwapState::default();
        assert_eq!(state.independent_field, Field::Input);
        assert_eq!(state.typed_value, "");
        assert_eq!(state.currency_ids(), FieldMap::new(None, None));
        assert_eq!(state.recipient, None);
    }

    #[test]
    fn field_map_indexes_by_field() {
        let mut map = FieldMap::new(1, 2);
        assert_eq!(map[Field::Input], 1);
        assert_eq!(map[Field::Output], 2);
        map[Field::Output] = 3;
        assert_eq!(map.map(|value| value * 10), FieldMap::new(10, 30));
    }

    #[test]
    fn switch_currencies_is_an_involution() {
        let original = state();
        let mut switched = original.clone();

        switched.reduce(SwapAction::SwitchCurrencies);
        assert_eq!(switched.independent_field, Field::Output);
        assert_eq!(switched.input, original.output);
        assert_eq!(switched.output, original.input);

        switched.reduce(SwapAction::SwitchCurrencies);
        assert_eq!(switched, original);
    }

    #[test]
    fn select_currency_sets_the_field() {
        let mut state = state();
        state.reduce(SwapAction::SelectCurrency {
            field: Field::Output,
            currency_id: "0xa::asset::USDT".to_string(),
        });

        assert_eq!(state.currency_id(Field::Output), Some("0xa::asset::USDT"));
        assert_eq!(
            state.currency_id(Field::Input),
            Some("0x1::aptos_coin::AptosCoin")
        );
        assert_eq!(state.independent_field, Field::Input);
    }

    #[test]
    fn selecting_the_other_sides_coin_swaps_sides() {
        let mut state = state();
        state.reduce(SwapAction::SelectCurrency {
            field: Field::Input,
            currency_id: "0xa::asset::USDC".to_string(),
        });

        assert_eq!(state.currency_id(Field::Input), Some("0xa::asset::USDC"));
        assert_eq!(
            state.currency_id(Field::Output),
            Some("0x1::aptos_coin::AptosCoin")
        );
        assert_eq!(state.independent_field, Field::Output);
    }

    #[test]
    fn type_input_marks_the_field_independent() {
        let mut state = state();
        state.reduce(SwapAction::TypeInput {
            field: Field::Output,
            typed_value: "20".to_string(),
        });

        assert_eq!(state.independent_field, Field::Output);
        assert_eq!(state.typed_value, "20");
    }

    #[test]
    fn set_recipient_sets_and_clears() {
        let mut state = state();
        state.reduce(SwapAction::SetRecipient {
            recipient: Some("0xbeef".to_string()),
        });
        assert_eq!(state.recipient.as_deref(), Some("0xbeef"));

        state.reduce(SwapAction::SetRecipient { recipient: None });
        assert_eq!(state.recipient, None);
    }

    #[test]
    fn replace_swap_state_overwrites_everything() {
        let mut state = state();
        state.reduce(SwapAction::ReplaceSwapState {
            field: Field::Output,
            typed_value: "3".to_string(),
            input_currency_id: None,
            output_currency_id: Some("0xa::asset::USDT".to_string()),
            recipient: Some("alice.apt".to_string()),
        });

        assert_eq!(
            state,
            SwapState {
                independent_field: Field::Output,
                typed_value: "3".to_string(),
                input: CurrencySelection::new(None),
                output: CurrencySelection::new(Some("0xa::asset::USDT".to_string())),
                recipient: Some("alice.apt".to_string()),
            }
        );
    }

    #[test]
    fn store_dispatch_updates_the_snapshot() {
        let owner = Owner::new();
        owner.set();

        let store = SwapStore::new(state());
        store.dispatch(SwapAction::TypeInput {
            field: Field::Input,
            typed_value: "7".to_string(),
        });

        assert_eq!(store.get_untracked().typed_value, "7");
        assert_eq!(store.with(|state| state.independent_field), Field::Input);
    }
}
