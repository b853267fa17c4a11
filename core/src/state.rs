use crate::constants::{CHAIN_ID, COIN_MAP, POOL_QUOTER};
use aptoswap_sdk::{Coin, Quoter};
use leptos::prelude::*;
use std::{collections::HashMap, ops::Deref, sync::Arc};

/// The chain the connected wallet reports. `None` until it is known.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainId {
    pub chain_id: RwSignal<Option<u8>>,
}

impl ChainId {
    pub fn new(chain_id: Option<u8>) -> Self {
        Self {
            chain_id: RwSignal::new(chain_id),
        }
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::new(Some(CHAIN_ID))
    }
}

impl Deref for ChainId {
    type Target = RwSignal<Option<u8>>;

    fn deref(&self) -> &Self::Target {
        &self.chain_id
    }
}

// It's not a signal, and should rarely be updated.
#[derive(Clone, Debug)]
pub struct CoinMap(pub Arc<HashMap<String, Coin>>);

impl CoinMap {
    pub fn new(coin_map: Arc<HashMap<String, Coin>>) -> Self {
        Self(coin_map)
    }

    /// Resolves a coin by its address. Unknown addresses resolve to `None`.
    pub fn coin(&self, address: Option<&str>) -> Option<Coin> {
        address.and_then(|address| self.0.get(address).cloned())
    }
}

impl Default for CoinMap {
    fn default() -> Self {
        Self::new(Arc::clone(&COIN_MAP))
    }
}

impl Deref for CoinMap {
    type Target = HashMap<String, Coin>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WalletSignals {
    pub account: RwSignal<Option<String>>,
}

impl WalletSignals {
    pub fn new() -> Self {
        Self {
            account: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.with(Option::is_some)
    }
}

impl Default for WalletSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw balances of the connected account, keyed by coin address.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoinBalances(pub RwSignal<HashMap<String, u128>>);

impl CoinBalances {
    pub fn new() -> Self {
        Self(RwSignal::new(HashMap::new()))
    }
}

impl Default for CoinBalances {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for CoinBalances {
    type Target = RwSignal<HashMap<String, u128>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The pricing hook's backend.
#[derive(Clone)]
pub struct QuoterContext(pub Arc<dyn Quoter + Send + Sync>);

impl QuoterContext {
    pub fn new(quoter: impl Quoter + Send + Sync + 'static) -> Self {
        Self(Arc::new(quoter))
    }
}

impl Default for QuoterContext {
    fn default() -> Self {
        Self::new(POOL_QUOTER.clone())
    }
}

impl Deref for QuoterContext {
    type Target = dyn Quoter + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NATIVE_COIN;

    #[test]
    fn coin_map_resolves_known_addresses_only() {
        let coins = CoinMap::default();
        assert_eq!(
            coins.coin(Some(NATIVE_COIN)).map(|coin| coin.symbol),
            Some("APT".to_string())
        );
        assert_eq!(coins.coin(Some("0x1::unknown::Coin")), None);
        assert_eq!(coins.coin(None), None);
    }

    #[test]
    fn wallet_starts_disconnected() {
        let owner = Owner::new();
        owner.set();

        let wallet = WalletSignals::new();
        assert!(!wallet.is_connected());

        wallet.account.set(Some("0x1".to_string()));
        assert!(wallet.is_connected());
    }

    #[test]
    fn chain_id_defaults_to_compiled_network() {
        let owner = Owner::new();
        owner.set();

        assert_eq!(ChainId::default().get(), Some(CHAIN_ID));
    }
}
