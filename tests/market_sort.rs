use crypto_dashboard_wasm::domain::market_data::{
    CoinId, MarketRecord, MarketSorter, PercentChange, SortConfig, SortDirection, SortKey,
    visible_markets,
};
use wasm_bindgen_test::*;

fn coin(id: &str, name: &str, rank: Option<u32>, price: f64, change: f64) -> MarketRecord {
    MarketRecord {
        id: CoinId::from(id),
        symbol: id.to_string(),
        name: name.to_string(),
        image: String::new(),
        current_price: price,
        market_cap: price * 1000.0,
        total_volume: price * 10.0,
        price_change_percentage_24h: PercentChange::new(change),
        market_cap_rank: rank,
        high_24h: price,
        low_24h: price,
    }
}

fn sample() -> Vec<MarketRecord> {
    vec![
        coin("btc", "Bitcoin", Some(1), 60_000.0, 1.5),
        coin("new", "newcoin", None, 0.01, 40.0),
        coin("eth", "Ethereum", Some(2), 3_000.0, -2.0),
        coin("ada", "Cardano", Some(9), 0.5, 1.5),
    ]
}

fn ids(records: &[MarketRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.value()).collect()
}

#[wasm_bindgen_test]
fn no_config_keeps_api_order() {
    let mut markets = sample();
    MarketSorter::sort(&mut markets, None);
    assert_eq!(ids(&markets), vec!["btc", "new", "eth", "ada"]);
}

#[wasm_bindgen_test]
fn price_descending() {
    let mut markets = sample();
    MarketSorter::sort(&mut markets, Some(SortConfig::new(SortKey::Price, SortDirection::Desc)));
    assert_eq!(ids(&markets), vec!["btc", "eth", "ada", "new"]);
}

#[wasm_bindgen_test]
fn name_ignores_case() {
    let mut markets = sample();
    MarketSorter::sort(&mut markets, Some(SortConfig::new(SortKey::Name, SortDirection::Asc)));
    assert_eq!(ids(&markets), vec!["btc", "ada", "eth", "new"]);
}

#[wasm_bindgen_test]
fn unranked_sorts_last_both_ways() {
    let mut asc = sample();
    MarketSorter::sort(&mut asc, Some(SortConfig::new(SortKey::Rank, SortDirection::Asc)));
    assert_eq!(ids(&asc), vec!["btc", "eth", "ada", "new"]);

    let mut desc = sample();
    MarketSorter::sort(&mut desc, Some(SortConfig::new(SortKey::Rank, SortDirection::Desc)));
    assert_eq!(ids(&desc), vec!["ada", "eth", "btc", "new"]);
}

#[wasm_bindgen_test]
fn equal_changes_keep_relative_order() {
    let mut markets = sample();
    MarketSorter::sort(
        &mut markets,
        Some(SortConfig::new(SortKey::Change24h, SortDirection::Asc)),
    );
    assert_eq!(ids(&markets), vec!["eth", "btc", "ada", "new"]);
}

#[wasm_bindgen_test]
fn filter_then_sort() {
    let rows = visible_markets(
        &sample(),
        "E",
        Some(SortConfig::new(SortKey::MarketCap, SortDirection::Asc)),
    );
    // "Ethereum", "newcoin"; "Bitcoin" has no 'e'
    assert_eq!(ids(&rows), vec!["new", "eth"]);
}
