use crate::{
    derived::{derive_swap_info, DerivedSwapInfo, SwapRequest},
    state::{SwapAction, SwapState, SwapStore},
    url::{query_parameters_to_swap_state, SwapQuery},
};
use aptoswap_core::{
    ChainId, CoinBalances, CoinMap, QuoterContext, WalletSignals, ALLOWED_SLIPPAGE,
};
use aptoswap_sdk::{BestTrade, Quoter};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use tracing::{debug, error, info};

/// The coins the URL selected, as seeded into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultCurrencies {
    pub input_currency_id: Option<String>,
    pub output_currency_id: Option<String>,
}

pub fn provide_swap_store() -> SwapStore {
    let store = SwapStore::new(SwapState::default());
    provide_context(store);
    store
}

pub fn use_swap_state() -> SwapStore {
    use_context::<SwapStore>().expect("swap store context missing!")
}

pub fn use_swap_request() -> Memo<SwapRequest> {
    let store = use_swap_state();
    let coin_map = use_context::<CoinMap>().expect("coin map context missing!");

    Memo::new(move |_| {
        store.with(|state| SwapRequest::resolve(state, |address| coin_map.coin(Some(address))))
    })
}

/// Prices `request`. Requests without both coins and an amount are never sent.
pub async fn fetch_best_trade(quoter: &dyn Quoter, request: &SwapRequest) -> BestTrade {
    let (Some(input), Some(output), Some(amount)) = (
        request.coins.input.as_ref(),
        request.coins.output.as_ref(),
        request.amount.as_ref(),
    ) else {
        return BestTrade::invalid();
    };

    match quoter.quote(request.trade_type, amount, input, output).await {
        Ok(trade) => BestTrade::from(trade),
        Err(error) => {
            error!("{error}");
            BestTrade::invalid()
        }
    }
}

/// The best trade for the current request. Reports `Loading` until the quote for the latest
/// request has resolved.
pub fn use_best_trade(request: Memo<SwapRequest>) -> Signal<BestTrade> {
    let quoter = use_context::<QuoterContext>().expect("quoter context missing!");

    let quote = AsyncDerived::new_unsync(move || {
        let request = request.get();
        let quoter = quoter.clone();

        async move {
            let trade = fetch_best_trade(&*quoter, &request).await;
            (request, trade)
        }
    });

    Signal::derive(move || latest_trade(&request.get(), quote.get()))
}

/// The quoted trade if it was priced for `current`. A quote for an older request, or no quote
/// yet, reads as `Loading`.
pub fn latest_trade(
    current: &SwapRequest,
    quoted: Option<(SwapRequest, BestTrade)>,
) -> BestTrade {
    quoted
        .filter(|(request, _)| request == current)
        .map(|(_, trade)| trade)
        .unwrap_or_else(BestTrade::loading)
}

pub fn use_derived_swap_info() -> Memo<DerivedSwapInfo> {
    let store = use_swap_state();
    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");
    let balances = use_context::<CoinBalances>().expect("coin balances context missing!");

    let request = use_swap_request();
    let trade = use_best_trade(request);

    Memo::new(move |_| {
        let account = wallet.account.get();
        let state = store.get();
        let request = request.get();
        let trade = trade.get();

        balances.with(|balances| {
            derive_swap_info(
                &state,
                account.as_deref(),
                &request,
                balances,
                trade,
                ALLOWED_SLIPPAGE,
            )
        })
    })
}

/// Replaces the store contents with the state parsed from the URL.
pub fn seed_store(store: SwapStore, parsed: SwapState) -> DefaultCurrencies {
    let defaults = DefaultCurrencies {
        input_currency_id: parsed.input.currency_id.clone(),
        output_currency_id: parsed.output.currency_id.clone(),
    };

    store.dispatch(SwapAction::ReplaceSwapState {
        field: parsed.independent_field,
        typed_value: parsed.typed_value,
        input_currency_id: parsed.input.currency_id,
        output_currency_id: parsed.output.currency_id,
        recipient: parsed.recipient,
    });

    defaults
}

/// Seeds the swap store from the query string once the chain id is known, and again whenever
/// it changes. Edits to the URL after that are ignored.
pub fn use_default_from_url() -> ReadSignal<Option<DefaultCurrencies>> {
    let store = use_swap_state();
    let chain_id = use_context::<ChainId>().expect("chain id context missing!");
    let query = use_query_map();

    let (defaults, set_defaults) = signal(None);

    let seed = seed_on_chain_id(store, chain_id, move || {
        query.with_untracked(SwapQuery::from_params)
    });

    Effect::new(move |_| {
        if let Some(seeded) = seed() {
            set_defaults.set(Some(seeded));
        }
    });

    defaults
}

/// One seeding pass. Only the chain id is tracked; `query` must read the URL untracked.
fn seed_on_chain_id(
    store: SwapStore,
    chain_id: ChainId,
    query: impl Fn() -> SwapQuery,
) -> impl Fn() -> Option<DefaultCurrencies> {
    move || {
        let Some(chain_id) = chain_id.get() else {
            debug!("waiting for a chain id");
            return None;
        };

        let parsed = query_parameters_to_swap_state(&query());
        info!("seeding swap state for chain {chain_id}");

        Some(seed_store(store, parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CurrencySelection, Field, FieldMap};
    use aptoswap_sdk::{
        Coin, CoinAmount, Error, PoolQuoter, PoolReserves, TradeState, TradeType, NATIVE_COIN,
    };
    use async_trait::async_trait;
    use futures::executor::block_on;

    const USDC: &str = "0xa::asset::USDC";
    const USDT: &str = "0xa::asset::USDT";

    fn apt() -> Coin {
        Coin::new(NATIVE_COIN, 8, "APT", "Aptos Coin")
    }

    fn usdc() -> Coin {
        Coin::new(USDC, 6, "USDC", "USD Coin")
    }

    fn usdt() -> Coin {
        Coin::new(USDT, 6, "USDT", "Tether USD")
    }

    fn quoter() -> PoolQuoter {
        PoolQuoter::new(
            vec![PoolReserves {
                coin_x: NATIVE_COIN.to_string(),
                coin_y: USDC.to_string(),
                reserve_x: 1_000_000_000_000,
                reserve_y: 85_000_000_000,
            }],
            25,
        )
    }

    fn request(output: Coin, amount: Option<CoinAmount>) -> SwapRequest {
        SwapRequest {
            trade_type: TradeType::ExactInput,
            coins: FieldMap::new(Some(apt()), Some(output)),
            amount,
        }
    }

    struct FailingQuoter;

    #[async_trait(?Send)]
    impl Quoter for FailingQuoter {
        async fn quote(
            &self,
            _trade_type: TradeType,
            _amount: &CoinAmount,
            _input: &Coin,
            _output: &Coin,
        ) -> Result<Option<aptoswap_sdk::Trade>, Error> {
            Err(Error::ZeroAmount)
        }
    }

    #[test]
    fn incomplete_requests_are_invalid() {
        let quoter = quoter();
        let trade = block_on(fetch_best_trade(&quoter, &request(usdc(), None)));
        assert_eq!(trade, BestTrade::invalid());
    }

    #[test]
    fn quotes_a_pooled_pair() {
        let quoter = quoter();
        let amount = CoinAmount::new(apt(), 100_000_000);
        let trade = block_on(fetch_best_trade(&quoter, &request(usdc(), Some(amount))));

        assert_eq!(trade.state, TradeState::Valid);
        let trade = trade.trade.expect("valid trade");
        assert_eq!(trade.input_amount.raw, 100_000_000);
        assert!(trade.output_amount.raw > 0);
    }

    #[test]
    fn unpooled_pair_has_no_route() {
        let quoter = quoter();
        let amount = CoinAmount::new(apt(), 100_000_000);
        let trade = block_on(fetch_best_trade(&quoter, &request(usdt(), Some(amount))));
        assert_eq!(trade, BestTrade::no_route());
    }

    #[test]
    fn quoter_errors_are_invalid() {
        let amount = CoinAmount::new(apt(), 100_000_000);
        let trade = block_on(fetch_best_trade(&FailingQuoter, &request(usdc(), Some(amount))));
        assert_eq!(trade, BestTrade::invalid());
    }

    #[test]
    fn only_the_latest_request_shows_its_trade() {
        let current = request(usdc(), Some(CoinAmount::new(apt(), 100_000_000)));
        let superseded = request(usdc(), Some(CoinAmount::new(apt(), 1)));
        let trade = block_on(fetch_best_trade(&quoter(), &current));
        assert_eq!(trade.state, TradeState::Valid);

        assert_eq!(latest_trade(&current, None), BestTrade::loading());
        assert_eq!(
            latest_trade(&current, Some((superseded, trade.clone()))),
            BestTrade::loading()
        );
        assert_eq!(latest_trade(&current, Some((current.clone(), trade.clone()))), trade);
    }

    #[test]
    fn seeds_when_the_chain_id_arrives_and_ignores_later_urls() {
        let owner = Owner::new();
        owner.set();

        let store = SwapStore::new(SwapState::default());
        let chain_id = ChainId::new(None);
        let query = RwSignal::new(SwapQuery {
            input_currency: Some(USDC.to_string()),
            exact_amount: Some("1".to_string()),
            ..Default::default()
        });

        let seed = seed_on_chain_id(store, chain_id, move || query.get_untracked());
        let seeded = Memo::new(move |_| seed());

        // no chain id yet
        assert_eq!(seeded.get(), None);
        assert_eq!(store.get_untracked(), SwapState::default());

        chain_id.set(Some(2));
        assert_eq!(
            seeded.get().and_then(|defaults| defaults.input_currency_id),
            Some(USDC.to_string())
        );
        assert_eq!(store.get_untracked().typed_value, "1");

        // a new query string alone does not re-seed
        query.set(SwapQuery {
            input_currency: Some(USDT.to_string()),
            exact_amount: Some("2".to_string()),
            ..Default::default()
        });
        assert_eq!(
            seeded.get().and_then(|defaults| defaults.input_currency_id),
            Some(USDC.to_string())
        );
        assert_eq!(store.get_untracked().currency_id(Field::Input), Some(USDC));
        assert_eq!(store.get_untracked().typed_value, "1");

        // switching chains does
        chain_id.set(Some(1));
        assert_eq!(
            seeded.get().and_then(|defaults| defaults.input_currency_id),
            Some(USDT.to_string())
        );
        assert_eq!(store.get_untracked().currency_id(Field::Input), Some(USDT));
        assert_eq!(store.get_untracked().typed_value, "2");
    }

    #[test]
    fn seeding_replaces_the_store() {
        let owner = Owner::new();
        owner.set();

        let store = SwapStore::new(SwapState {
            typed_value: "9".to_string(),
            recipient: Some("0xbeef".to_string()),
            ..Default::default()
        });

        let parsed = query_parameters_to_swap_state(&SwapQuery {
            input_currency: Some(USDC.to_string()),
            exact_amount: Some("3".to_string()),
            exact_field: Some("OUTPUT".to_string()),
            ..Default::default()
        });
        let defaults = seed_store(store, parsed);

        assert_eq!(
            defaults,
            DefaultCurrencies {
                input_currency_id: Some(USDC.to_string()),
                output_currency_id: None,
            }
        );
        assert_eq!(
            store.get_untracked(),
            SwapState {
                independent_field: Field::Output,
                typed_value: "3".to_string(),
                input: CurrencySelection::new(Some(USDC.to_string())),
                output: CurrencySelection::new(None),
                recipient: None,
            }
        );
    }
}
