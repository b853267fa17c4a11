use crate::{
    coin::CoinAmount,
    constants::{TradeType, BASIS_POINT_MAX},
    utils::mul_div,
};

/// A percentage expressed in basis points. Smallest supported value = 0.01%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Percent(u16);

impl Percent {
    pub const fn from_bps(bps: u16) -> Self {
        Self(bps)
    }

    pub fn bps(&self) -> u16 {
        self.0
    }

    /// `1 + self`, in basis points. Widened so any `u16` fits.
    fn plus_one_in_bps(&self) -> u128 {
        u128::from(BASIS_POINT_MAX) + u128::from(self.0)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeState {
    Loading,
    Invalid,
    NoRouteFound,
    Valid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub trade_type: TradeType,
    pub input_amount: CoinAmount,
    pub output_amount: CoinAmount,
    /// Coin types visited by the trade, input first.
    pub route: Vec<String>,
}

impl Trade {
    /// The most the trader could spend once slippage is accounted for.
    pub fn maximum_amount_in(&self, slippage: Percent) -> CoinAmount {
        match self.trade_type {
            TradeType::ExactInput => self.input_amount.clone(),
            TradeType::ExactOutput => CoinAmount::new(
                self.input_amount.coin.clone(),
                mul_div(
                    self.input_amount.raw,
                    slippage.plus_one_in_bps(),
                    BASIS_POINT_MAX.into(),
                ),
            ),
        }
    }

    /// The least the trader could receive once slippage is accounted for.
    pub fn minimum_amount_out(&self, slippage: Percent) -> CoinAmount {
        match self.trade_type {
            TradeType::ExactOutput => self.output_amount.clone(),
            TradeType::ExactInput => CoinAmount::new(
                self.output_amount.coin.clone(),
                mul_div(
                    self.output_amount.raw,
                    BASIS_POINT_MAX.into(),
                    slippage.plus_one_in_bps(),
                ),
            ),
        }
    }

    /// Output per unit of input, in whole coins.
    pub fn execution_price(&self) -> Option<f64> {
        if self.input_amount.raw == 0 {
            return None;
        }

        let input =
            self.input_amount.raw as f64 / 10f64.powi(self.input_amount.coin.decimals.into());
        let output =
            self.output_amount.raw as f64 / 10f64.powi(self.output_amount.coin.decimals.into());

        Some(output / input)
    }
}

/// What the pricing hook reports for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestTrade {
    pub state: TradeState,
    pub trade: Option<Trade>,
}

impl BestTrade {
    pub fn loading() -> Self {
        Self {
            state: TradeState::Loading,
            trade: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            state: TradeState::Invalid,
            trade: None,
        }
    }

    pub fn no_route() -> Self {
        Self {
            state: TradeState::NoRouteFound,
            trade: None,
        }
    }

    pub fn valid(trade: Trade) -> Self {
        Self {
            state: TradeState::Valid,
            trade: Some(trade),
        }
    }
}

impl From<Option<Trade>> for BestTrade {
    fn from(trade: Option<Trade>) -> Self {
        trade.map_or_else(Self::no_route, Self::valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coin;

    fn trade(trade_type: TradeType, input: u128, output: u128) -> Trade {
        let apt = Coin::new("0x1::aptos_coin::AptosCoin", 8, "APT", "Aptos Coin");
        let usdc = Coin::new("0xa::asset::USDC", 6, "USDC", "USD Coin");
        Trade {
            trade_type,
            input_amount: CoinAmount::new(apt.clone(), input),
            output_amount: CoinAmount::new(usdc.clone(), output),
            route: vec![apt.address, usdc.address],
        }
    }

    #[test]
    fn percent_displays_with_two_decimals() {
        assert_eq!(Percent::from_bps(50).to_string(), "0.50%");
        assert_eq!(Percent::from_bps(125).to_string(), "1.25%");
        assert_eq!(Percent::from_bps(1).to_string(), "0.01%");
    }

    #[test]
    fn exact_input_bounds() {
        let trade = trade(TradeType::ExactInput, 100_000_000, 10_050_000);
        let slippage = Percent::from_bps(50);

        assert_eq!(trade.maximum_amount_in(slippage).raw, 100_000_000);
        // 10_050_000 / 1.005
        assert_eq!(trade.minimum_amount_out(slippage).raw, 10_000_000);
    }

    #[test]
    fn exact_output_bounds() {
        let trade = trade(TradeType::ExactOutput, 100_000_000, 10_000_000);
        let slippage = Percent::from_bps(50);

        assert_eq!(trade.maximum_amount_in(slippage).raw, 100_500_000);
        assert_eq!(trade.minimum_amount_out(slippage).raw, 10_000_000);
    }

    #[test]
    fn bounds_hold_for_the_largest_slippage() {
        let slippage = Percent::from_bps(u16::MAX);

        let exact_output = trade(TradeType::ExactOutput, 10_000, 1);
        // 10_000 * 7.5535
        assert_eq!(exact_output.maximum_amount_in(slippage).raw, 75_535);

        let exact_input = trade(TradeType::ExactInput, 1, 75_535);
        assert_eq!(exact_input.minimum_amount_out(slippage).raw, 10_000);
    }

    #[test]
    fn execution_price_accounts_for_decimals() {
        let trade = trade(TradeType::ExactInput, 200_000_000, 15_000_000);
        assert_eq!(trade.execution_price(), Some(7.5));
    }

    #[test]
    fn best_trade_from_optional_trade() {
        assert_eq!(BestTrade::from(None).state, TradeState::NoRouteFound);
        let found = BestTrade::from(Some(trade(TradeType::ExactInput, 1, 1)));
        assert_eq!(found.state, TradeState::Valid);
        assert!(found.trade.is_some());
    }
}
