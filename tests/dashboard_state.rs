use std::cell::RefCell;
use std::collections::VecDeque;

use crypto_dashboard_wasm::application::RefreshMarketsUseCase;
use crypto_dashboard_wasm::domain::errors::{AppError, NetworkResult};
use crypto_dashboard_wasm::domain::market_data::{
    CoinId, MarketDataRepository, MarketRecord, PercentChange,
};
use crypto_dashboard_wasm::domain::state::{DashboardState, ViewPhase};
use futures::executor::block_on;
use wasm_bindgen_test::*;

fn coin(id: &str) -> MarketRecord {
    MarketRecord {
        id: CoinId::from(id),
        symbol: id.to_string(),
        name: id.to_string(),
        image: String::new(),
        current_price: 1.0,
        market_cap: 1.0,
        total_volume: 1.0,
        price_change_percentage_24h: PercentChange::new(0.0),
        market_cap_rank: None,
        high_24h: 1.0,
        low_24h: 1.0,
    }
}

/// Replays canned responses in order
struct ScriptedRepository {
    responses: RefCell<VecDeque<NetworkResult<Vec<MarketRecord>>>>,
}

impl ScriptedRepository {
    fn new(responses: Vec<NetworkResult<Vec<MarketRecord>>>) -> Self {
        Self { responses: RefCell::new(responses.into()) }
    }
}

impl MarketDataRepository for ScriptedRepository {
    async fn fetch_markets(&self) -> NetworkResult<Vec<MarketRecord>> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::network("no more responses")))
    }
}

#[wasm_bindgen_test]
fn starts_in_initial_loading() {
    let state = DashboardState::new();
    assert_eq!(state.phase(), ViewPhase::InitialLoading);
    assert!(!state.refreshing);
}

#[wasm_bindgen_test]
fn refresh_flag_is_set_while_in_flight() {
    let mut state = DashboardState::new();
    state.begin_refresh();
    assert!(state.refreshing);
    state.apply_result(Ok(vec![coin("btc")]));
    assert!(!state.refreshing);
    assert!(!state.loading);
}

#[wasm_bindgen_test]
fn success_replaces_list_and_clears_error() {
    let use_case = RefreshMarketsUseCase::new(ScriptedRepository::new(vec![
        Err(AppError::network("Failed to fetch data")),
        Ok(vec![coin("btc"), coin("eth")]),
    ]));
    let mut state = DashboardState::new();

    block_on(use_case.refresh(&mut state));
    assert_eq!(state.phase(), ViewPhase::Failed("Failed to fetch data".to_string()));

    // manual retry
    block_on(use_case.refresh(&mut state));
    assert_eq!(state.phase(), ViewPhase::Ready);
    assert_eq!(state.markets.len(), 2);
    assert_eq!(state.error, None);
}

#[wasm_bindgen_test]
fn failure_keeps_previous_list() {
    let use_case = RefreshMarketsUseCase::new(ScriptedRepository::new(vec![
        Ok(vec![coin("btc")]),
        Err(AppError::network("Request failed: timeout")),
    ]));
    let mut state = DashboardState::new();

    block_on(use_case.refresh(&mut state));
    block_on(use_case.refresh(&mut state));

    assert_eq!(state.markets.len(), 1);
    assert_eq!(state.phase(), ViewPhase::Failed("Request failed: timeout".to_string()));
}

#[wasm_bindgen_test]
fn empty_success_is_ready_not_loading() {
    let mut state = DashboardState::new();
    state.apply_result(Ok(Vec::new()));
    assert_eq!(state.phase(), ViewPhase::Ready);
}

#[wasm_bindgen_test]
fn later_write_wins() {
    let mut state = DashboardState::new();
    state.begin_refresh();
    state.begin_refresh();
    state.apply_result(Ok(vec![coin("slow")]));
    state.apply_result(Ok(vec![coin("fast"), coin("other")]));
    assert_eq!(state.markets[0].id.value(), "fast");
}
