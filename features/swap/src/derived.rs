use crate::state::{Field, FieldMap, SwapState};
use aptoswap_sdk::{
    address::parse_address, BestTrade, Coin, CoinAmount, Percent, TradeState, TradeType,
};
use std::collections::HashMap;

/// The single message shown on the swap button when the swap can't proceed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Connect Wallet")]
    ConnectWallet,

    #[error("Select a coin")]
    SelectCoin,

    #[error("Enter an amount")]
    EnterAmount,

    #[error("Enter a recipient")]
    EnterRecipient,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("No route found")]
    NoRouteFound,
}

/// What the pricing hook is asked to quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub trade_type: TradeType,
    pub coins: FieldMap<Option<Coin>>,
    /// The typed value, parsed against the independent coin.
    pub amount: Option<CoinAmount>,
}

impl SwapRequest {
    pub fn resolve(state: &SwapState, lookup: impl Fn(&str) -> Option<Coin>) -> Self {
        let coins = state.currency_ids().map(|id| id.and_then(&lookup));
        let is_exact_in = state.independent_field == Field::Input;

        let amount = coins[state.independent_field]
            .as_ref()
            .and_then(|coin| CoinAmount::try_parse(&state.typed_value, coin));

        Self {
            trade_type: TradeType::from_exact_in(is_exact_in),
            coins,
            amount,
        }
    }

    pub fn is_exact_in(&self) -> bool {
        self.trade_type == TradeType::ExactInput
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSwapInfo {
    pub coins: FieldMap<Option<Coin>>,
    pub coin_balances: FieldMap<Option<CoinAmount>>,
    pub is_exact_in: bool,
    pub parsed_amount: Option<CoinAmount>,
    pub input_error: Option<InputError>,
    pub trade: BestTrade,
    pub allowed_slippage: Percent,
    /// Who receives the output coin.
    pub to: Option<String>,
}

impl DerivedSwapInfo {
    /// The amount to show in `field`: what was typed for the independent field, the trade's
    /// amount for the dependent one.
    pub fn formatted_amount(&self, field: Field, typed_value: &str) -> String {
        let independent = if self.is_exact_in {
            Field::Input
        } else {
            Field::Output
        };

        if field == independent {
            return typed_value.to_string();
        }

        self.trade
            .trade
            .as_ref()
            .map(|trade| match field {
                Field::Input => trade.input_amount.to_exact(),
                Field::Output => trade.output_amount.to_exact(),
            })
            .unwrap_or_default()
    }
}

pub fn resolve_recipient(state: &SwapState, account: Option<&str>) -> Option<String> {
    state
        .recipient
        .clone()
        .or_else(|| account.map(str::to_owned))
}

/// Balances are only known with a connected account. A selected coin that's missing from
/// the map has a zero balance.
pub fn resolve_balances(
    account: Option<&str>,
    coins: &FieldMap<Option<Coin>>,
    balances: &HashMap<String, u128>,
) -> FieldMap<Option<CoinAmount>> {
    coins.clone().map(|coin| {
        account?;
        let coin = coin?;
        let raw = balances.get(&coin.address).copied().unwrap_or_default();
        Some(CoinAmount::new(coin, raw))
    })
}

pub fn compute_input_error(
    account: Option<&str>,
    coins: &FieldMap<Option<Coin>>,
    parsed_amount: Option<&CoinAmount>,
    to: Option<&str>,
    balances: &FieldMap<Option<CoinAmount>>,
    trade: &BestTrade,
    allowed_slippage: Percent,
) -> Option<InputError> {
    let mut input_error = None;

    if account.is_none() {
        input_error = Some(InputError::ConnectWallet);
    }

    if coins.input.is_none() || coins.output.is_none() {
        input_error = input_error.or(Some(InputError::SelectCoin));
    }

    if parsed_amount.is_none() {
        input_error = input_error.or(Some(InputError::EnterAmount));
    }

    if to.and_then(parse_address).is_none() {
        input_error = input_error.or(Some(InputError::EnterRecipient));
    }

    // overrides whatever was found above
    if let (Some(balance_in), Some(trade)) = (&balances.input, &trade.trade) {
        if balance_in.less_than(&trade.maximum_amount_in(allowed_slippage)) {
            input_error = Some(InputError::InsufficientBalance);
        }
    }

    if trade.state == TradeState::NoRouteFound {
        input_error = input_error.or(Some(InputError::NoRouteFound));
    }

    input_error
}

pub fn derive_swap_info(
    state: &SwapState,
    account: Option<&str>,
    request: &SwapRequest,
    balances: &HashMap<String, u128>,
    trade: BestTrade,
    allowed_slippage: Percent,
) -> DerivedSwapInfo {
    let to = resolve_recipient(state, account);
    let coin_balances = resolve_balances(account, &request.coins, balances);

    let input_error = compute_input_error(
        account,
        &request.coins,
        request.amount.as_ref(),
        to.as_deref(),
        &coin_balances,
        &trade,
        allowed_slippage,
    );

    DerivedSwapInfo {
        coins: request.coins.clone(),
        coin_balances,
        is_exact_in: request.is_exact_in(),
        parsed_amount: request.amount.clone(),
        input_error,
        trade,
        allowed_slippage,
        to,
    }
}
