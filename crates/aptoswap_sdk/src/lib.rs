pub mod address;
pub mod coin;
pub mod constants;
mod error;
pub mod quoter;
pub mod trade;
pub mod utils;

pub use coin::{Coin, CoinAmount};
pub use constants::{Network, TradeType, NATIVE_COIN};
pub use error::Error;
pub use quoter::{PoolQuoter, PoolReserves, Quoter};
pub use trade::{BestTrade, Percent, Trade, TradeState};
