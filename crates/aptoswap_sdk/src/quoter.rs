use crate::{
    coin::{Coin, CoinAmount},
    constants::{TradeType, BASIS_POINT_MAX},
    error::Error,
    trade::Trade,
};
use async_trait::async_trait;
use ethnum::U256;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Prices a trade between two coins.
///
/// `amount` is denominated in the input coin for [`TradeType::ExactInput`] and in the output
/// coin for [`TradeType::ExactOutput`]. `Ok(None)` means there is no route between the coins.
#[async_trait(?Send)]
pub trait Quoter {
    async fn quote(
        &self,
        trade_type: TradeType,
        amount: &CoinAmount,
        input: &Coin,
        output: &Coin,
    ) -> Result<Option<Trade>, Error>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolReserves {
    pub coin_x: String,
    pub coin_y: String,
    pub reserve_x: u128,
    pub reserve_y: u128,
}

/// Quotes single-hop trades against constant-product pool reserves.
#[derive(Debug, Clone, Default)]
pub struct PoolQuoter {
    pools: Vec<PoolReserves>,
    fee_bps: u16,
}

impl PoolQuoter {
    pub fn new(pools: Vec<PoolReserves>, fee_bps: u16) -> Self {
        Self { pools, fee_bps }
    }

    /// Returns `(reserve_in, reserve_out)` for the pool trading `input` for `output`.
    pub fn reserves(&self, input: &str, output: &str) -> Option<(u128, u128)> {
        self.pools.iter().find_map(|pool| {
            if pool.coin_x == input && pool.coin_y == output {
                Some((pool.reserve_x, pool.reserve_y))
            } else if pool.coin_y == input && pool.coin_x == output {
                Some((pool.reserve_y, pool.reserve_x))
            } else {
                None
            }
        })
    }

    /// The share of the input left after fees, in basis points. `None` once the fee takes
    /// everything.
    fn fee_factor(&self) -> Option<U256> {
        BASIS_POINT_MAX
            .checked_sub(self.fee_bps)
            .filter(|factor| *factor > 0)
            .map(U256::from)
    }

    pub fn get_amount_out(
        &self,
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Option<u128> {
        if amount_in == 0 || reserve_in == 0 || reserve_out == 0 {
            return None;
        }

        let fee_factor = self.fee_factor()?;
        let amount_in_with_fee = U256::from(amount_in) * fee_factor;
        let numerator = amount_in_with_fee * U256::from(reserve_out);
        let denominator =
            U256::from(reserve_in) * U256::from(BASIS_POINT_MAX) + amount_in_with_fee;

        let amount_out = (numerator / denominator).as_u128();

        (amount_out > 0).then_some(amount_out)
    }

    pub fn get_amount_in(
        &self,
        amount_out: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Option<u128> {
        if amount_out == 0 || reserve_in == 0 || amount_out >= reserve_out {
            return None;
        }

        let numerator =
            U256::from(reserve_in) * U256::from(amount_out) * U256::from(BASIS_POINT_MAX);
        let denominator =
            U256::from(reserve_out - amount_out) * self.fee_factor()?;

        let amount_in = numerator / denominator + U256::ONE;
        if amount_in > U256::from(u128::MAX) {
            return None;
        }

        Some(amount_in.as_u128())
    }
}

#[async_trait(?Send)]
impl Quoter for PoolQuoter {
    async fn quote(
        &self,
        trade_type: TradeType,
        amount: &CoinAmount,
        input: &Coin,
        output: &Coin,
    ) -> Result<Option<Trade>, Error> {
        if input.address == output.address {
            return Err(Error::IdenticalCoins);
        }
        if amount.raw == 0 {
            return Err(Error::ZeroAmount);
        }

        let expected = match trade_type {
            TradeType::ExactInput => input,
            TradeType::ExactOutput => output,
        };
        if amount.coin.address != expected.address {
            return Err(Error::CoinMismatch {
                expected: expected.address.clone(),
                found: amount.coin.address.clone(),
            });
        }

        let Some((reserve_in, reserve_out)) = self.reserves(&input.address, &output.address) else {
            debug!("no pool for {} -> {}", input.symbol, output.symbol);
            return Ok(None);
        };
        trace!("reserves: {reserve_in} / {reserve_out}");

        let (amount_in, amount_out) = match trade_type {
            TradeType::ExactInput => {
                let Some(amount_out) = self.get_amount_out(amount.raw, reserve_in, reserve_out)
                else {
                    return Ok(None);
                };
                (amount.raw, amount_out)
            }
            TradeType::ExactOutput => {
                let Some(amount_in) = self.get_amount_in(amount.raw, reserve_in, reserve_out)
                else {
                    return Ok(None);
                };
                (amount_in, amount.raw)
            }
        };

        Ok(Some(Trade {
            trade_type,
            input_amount: CoinAmount::new(input.clone(), amount_in),
            output_amount: CoinAmount::new(output.clone(), amount_out),
            route: vec![input.address.clone(), output.address.clone()],
        }))
    }
}
