pub mod constants;
mod error;
pub mod state;
pub mod utils;

pub use constants::{ALLOWED_SLIPPAGE, CHAIN_ID, COIN_MAP, NETWORK, NODE};
pub use error::Error;
pub use state::{ChainId, CoinBalances, CoinMap, QuoterContext, WalletSignals};

pub const BASE_URL: &str = "/aptoswap-leptos";
