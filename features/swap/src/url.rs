//! Seeding the swap state from the page's query string.

use crate::state::{CurrencySelection, Field, SwapState};
use aptoswap_sdk::{
    address::{is_hex_address_40, is_name, parse_address},
    NATIVE_COIN,
};
use leptos_router::params::ParamsMap;

/// The query parameters the swap page understands. All of them are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapQuery {
    pub input_currency: Option<String>,
    pub output_currency: Option<String>,
    pub exact_amount: Option<String>,
    pub exact_field: Option<String>,
    pub recipient: Option<String>,
}

impl SwapQuery {
    pub fn from_params(params: &ParamsMap) -> Self {
        Self::from_lookup(|key| params.get(key))
    }

    /// Reads each parameter by its query key through `get`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            input_currency: get("inputCurrency"),
            output_currency: get("outputCurrency"),
            exact_amount: get("exactAmount"),
            exact_field: get("exactField"),
            recipient: get("recipient"),
        }
    }
}

fn parse_currency_from_url_parameter(param: Option<&str>) -> String {
    param.and_then(parse_address).unwrap_or_default()
}

fn parse_token_amount_url_parameter(param: Option<&str>) -> String {
    param
        .filter(|value| value.parse::<f64>().is_ok_and(f64::is_finite))
        .map(str::to_owned)
        .unwrap_or_default()
}

fn parse_independent_field_url_parameter(param: Option<&str>) -> Field {
    match param {
        Some(value) if value.eq_ignore_ascii_case("output") => Field::Output,
        _ => Field::Input,
    }
}

/// Accepts an address, a human-readable name, or a 40 hex digit address.
pub fn validated_recipient(recipient: Option<&str>) -> Option<String> {
    let recipient = recipient?;

    if parse_address(recipient).is_some() {
        return Some(recipient.to_string());
    }
    if is_name(recipient) {
        return Some(recipient.to_string());
    }
    // NOTE: already covered by `parse_address` for Aptos addresses.
    if is_hex_address_40(recipient) {
        return Some(recipient.to_string());
    }

    None
}

pub fn query_parameters_to_swap_state(query: &SwapQuery) -> SwapState {
    let mut input_currency = parse_currency_from_url_parameter(query.input_currency.as_deref());
    let mut output_currency = parse_currency_from_url_parameter(query.output_currency.as_deref());
    let typed_value = parse_token_amount_url_parameter(query.exact_amount.as_deref());
    let independent_field = parse_independent_field_url_parameter(query.exact_field.as_deref());

    if input_currency.is_empty()
        && output_currency.is_empty()
        && typed_value.is_empty()
        && independent_field == Field::Input
    {
        input_currency = NATIVE_COIN.to_string();
    } else if input_currency == output_currency {
        output_currency.clear();
    }

    let recipient = validated_recipient(query.recipient.as_deref());

    SwapState {
        independent_field,
        typed_value,
        input: CurrencySelection::new(Some(input_currency).filter(|id| !id.is_empty())),
        output: CurrencySelection::new(Some(output_currency).filter(|id| !id.is_empty())),
        recipient,
    }
}
