use crate::{
    constants::NATIVE_COIN,
    utils::{format_amount, try_parse_amount},
};
use serde::{Deserialize, Serialize};

// TODO: add a way to register coins that are not in the bundled list
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// The fully qualified coin type, e.g. `0x1::aptos_coin::AptosCoin`.
    pub address: String,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub logo_uri: Option<String>,
}

impl Coin {
    pub fn new(
        address: impl Into<String>,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            decimals,
            symbol: symbol.into(),
            name: name.into(),
            logo_uri: None,
        }
    }

    pub fn is_native(&self) -> bool {
        self.address == NATIVE_COIN
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// An integer amount of a coin, in its smallest unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CoinAmount {
    pub coin: Coin,
    pub raw: u128,
}

impl CoinAmount {
    pub fn new(coin: Coin, raw: u128) -> Self {
        Self { coin, raw }
    }

    /// Parses what a user typed against the coin's precision. See [`try_parse_amount`].
    pub fn try_parse(value: &str, coin: &Coin) -> Option<Self> {
        try_parse_amount(value, coin.decimals).map(|raw| Self::new(coin.clone(), raw))
    }

    pub fn to_exact(&self) -> String {
        format_amount(self.raw, self.coin.decimals)
    }

    pub fn less_than(&self, other: &CoinAmount) -> bool {
        self.raw < other.raw
    }
}

impl std::fmt::Display for CoinAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.coin.symbol)
    }
}
