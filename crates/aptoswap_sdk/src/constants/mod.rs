use std::str::FromStr;

/// The coin type of the chain's native asset.
pub const NATIVE_COIN: &str = "0x1::aptos_coin::AptosCoin";

pub const BASIS_POINT_MAX: u16 = 10_000;

/// Swap fee charged by the pools, in basis points.
pub const DEFAULT_FEE_BPS: u16 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Returns the numeric chain id reported by the node for each network
    pub const fn chain_id(&self) -> u8 {
        match self {
            Network::Mainnet => 1,
            Network::Testnet => 2,
            Network::Devnet => 174,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl FromStr for Network {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "mainnet" => Ok(Network::Mainnet),
            "2" | "testnet" => Ok(Network::Testnet),
            "174" | "devnet" => Ok(Network::Devnet),
            _ => Err("Invalid chain ID"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

impl TradeType {
    pub fn from_exact_in(is_exact_in: bool) -> Self {
        if is_exact_in {
            TradeType::ExactInput
        } else {
            TradeType::ExactOutput
        }
    }
}
