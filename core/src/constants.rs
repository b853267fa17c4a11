use aptoswap_sdk::{
    constants::DEFAULT_FEE_BPS, Coin, Network, Percent, PoolQuoter, PoolReserves,
};
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};
use tracing::debug;

pub use aptoswap_sdk::NATIVE_COIN;

// Compile-time configuration for network and node details
pub const NETWORK: Network = if cfg!(feature = "mainnet") {
    Network::Mainnet
} else if cfg!(feature = "testnet") {
    Network::Testnet
} else {
    Network::Devnet
};

pub const CHAIN_ID: u8 = NETWORK.chain_id();

pub const NODE: &str = if cfg!(feature = "mainnet") {
    "https://fullnode.mainnet.aptoslabs.com/v1"
} else if cfg!(feature = "testnet") {
    "https://fullnode.testnet.aptoslabs.com/v1"
} else {
    "http://localhost:8080/v1"
};

/// Slippage tolerance used for every derived trade (0.50%).
pub const ALLOWED_SLIPPAGE: Percent = Percent::from_bps(50);

fn coin_map_from_json(json: &str) -> Arc<HashMap<String, Coin>> {
    let coins: Vec<Coin> = serde_json::from_str(json).expect("Failed to deserialize coin list");
    debug!("loaded {} bundled coins", coins.len());

    Arc::new(
        coins
            .into_iter()
            .map(|coin| (coin.address.clone(), coin))
            .collect(),
    )
}

pub static DEV_COIN_MAP: LazyLock<Arc<HashMap<String, Coin>>> = LazyLock::new(|| {
    coin_map_from_json(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/coins_devnet.json"
    )))
});

pub static TESTNET_COIN_MAP: LazyLock<Arc<HashMap<String, Coin>>> = LazyLock::new(|| {
    coin_map_from_json(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/coins_testnet.json"
    )))
});

pub static MAINNET_COIN_MAP: LazyLock<Arc<HashMap<String, Coin>>> = LazyLock::new(|| {
    coin_map_from_json(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/coins_mainnet.json"
    )))
});

pub fn get_coin_map(network: Network) -> Arc<HashMap<String, Coin>> {
    match network {
        Network::Devnet => Arc::clone(&DEV_COIN_MAP),
        Network::Testnet => Arc::clone(&TESTNET_COIN_MAP),
        Network::Mainnet => Arc::clone(&MAINNET_COIN_MAP),
    }
}

pub static COIN_MAP: LazyLock<Arc<HashMap<String, Coin>>> =
    LazyLock::new(|| get_coin_map(NETWORK));

// NOTE: Reserve snapshots stand in for live pool queries. They are bundled per network and
// only used to price trades for display.
pub static POOL_RESERVES: LazyLock<Vec<PoolReserves>> = LazyLock::new(|| {
    let json = match NETWORK {
        Network::Devnet => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../app/public/pools_devnet.json"
        )),
        Network::Testnet => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../app/public/pools_testnet.json"
        )),
        Network::Mainnet => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../app/public/pools_mainnet.json"
        )),
    };
    let pools: Vec<PoolReserves> =
        serde_json::from_str(json).expect("Failed to deserialize pool reserves");
    debug!("loaded {} pool snapshots for {}", pools.len(), NETWORK.as_str());
    pools
});

pub static POOL_QUOTER: LazyLock<PoolQuoter> =
    LazyLock::new(|| PoolQuoter::new(POOL_RESERVES.clone(), DEFAULT_FEE_BPS));

#[cfg(test)]
mod tests {
    use super::*;
    use aptoswap_sdk::address::parse_address;

    #[test]
    fn bundled_coin_lists_include_the_native_coin() {
        for network in [Network::Devnet, Network::Testnet, Network::Mainnet] {
            let coins = get_coin_map(network);
            let native = coins.get(NATIVE_COIN).expect("native coin missing");
            assert_eq!(native.symbol, "APT");
            assert_eq!(native.decimals, 8);
        }
    }

    #[test]
    fn bundled_coin_addresses_are_canonical() {
        for network in [Network::Devnet, Network::Testnet, Network::Mainnet] {
            for address in get_coin_map(network).keys() {
                assert_eq!(parse_address(address).as_deref(), Some(address.as_str()));
            }
        }
    }

    #[test]
    fn bundled_pools_reference_known_coins() {
        for pool in POOL_RESERVES.iter() {
            assert!(COIN_MAP.contains_key(&pool.coin_x), "{}", pool.coin_x);
            assert!(COIN_MAP.contains_key(&pool.coin_y), "{}", pool.coin_y);
        }
    }
}
