use crypto_dashboard_wasm::domain::market_data::{
    CoinId, MarketRecord, MarketStats, PercentChange,
};
use quickcheck_macros::quickcheck;
use wasm_bindgen_test::*;

fn coin(id: &str, market_cap: f64, volume: f64, change: f64) -> MarketRecord {
    MarketRecord {
        id: CoinId::from(id),
        symbol: id.to_string(),
        name: id.to_string(),
        image: String::new(),
        current_price: 1.0,
        market_cap,
        total_volume: volume,
        price_change_percentage_24h: PercentChange::new(change),
        market_cap_rank: Some(1),
        high_24h: 1.0,
        low_24h: 1.0,
    }
}

#[wasm_bindgen_test]
fn empty_list_has_no_stats() {
    assert!(MarketStats::compute(&[]).is_none());
}

#[wasm_bindgen_test]
fn sums_caps_and_volumes() {
    let markets = vec![
        coin("btc", 1_000_000_000_000.0, 30_000_000_000.0, 1.0),
        coin("eth", 400_000_000_000.0, 15_000_000_000.0, 2.0),
        coin("sol", 60_000_000_000.0, 2_000_000_000.0, -3.0),
    ];
    let stats = MarketStats::compute(&markets).unwrap();
    assert_eq!(stats.total_market_cap, 1_460_000_000_000.0);
    assert_eq!(stats.total_volume, 47_000_000_000.0);
    assert_eq!(stats.top_gainer.id.value(), "eth");
}

#[wasm_bindgen_test]
fn top_gainer_tie_goes_to_first() {
    let markets = vec![
        coin("a", 1.0, 1.0, 5.0),
        coin("b", 1.0, 1.0, 7.5),
        coin("c", 1.0, 1.0, 7.5),
    ];
    let stats = MarketStats::compute(&markets).unwrap();
    assert_eq!(stats.top_gainer.id.value(), "b");
}

#[wasm_bindgen_test]
fn all_losers_still_pick_the_smallest_loss() {
    let markets = vec![coin("a", 1.0, 1.0, -4.0), coin("b", 1.0, 1.0, -0.5)];
    let stats = MarketStats::compute(&markets).unwrap();
    assert_eq!(stats.top_gainer.id.value(), "b");
}

#[quickcheck]
fn top_gainer_is_first_maximum(changes: Vec<i16>) -> bool {
    let markets: Vec<MarketRecord> = changes
        .iter()
        .enumerate()
        .map(|(i, c)| coin(&i.to_string(), 1.0, 1.0, *c as f64 / 10.0))
        .collect();
    match MarketStats::compute(&markets) {
        None => markets.is_empty(),
        Some(stats) => {
            let max = changes.iter().copied().max().unwrap_or_default();
            let first = changes.iter().position(|c| *c == max).unwrap_or_default();
            stats.top_gainer.id.value() == first.to_string()
        }
    }
}

#[quickcheck]
fn totals_match_sums(caps: Vec<u32>) -> bool {
    let markets: Vec<MarketRecord> = caps
        .iter()
        .enumerate()
        .map(|(i, c)| coin(&i.to_string(), *c as f64, *c as f64 * 2.0, 0.0))
        .collect();
    let expected: f64 = caps.iter().map(|c| *c as f64).sum();
    match MarketStats::compute(&markets) {
        None => caps.is_empty(),
        Some(stats) => stats.total_market_cap == expected && stats.total_volume == expected * 2.0,
    }
}
