mod coin_balance;
mod spinner;

pub use coin_balance::CoinBalance;
pub use spinner::Spinner;
