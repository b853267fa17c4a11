#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Amount is denominated in {found}, expected {expected}")]
    CoinMismatch { expected: String, found: String },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Input and output coin are the same")]
    IdenticalCoins,
}
