use crypto_dashboard_wasm::domain::market_data::{
    CoinId, MarketFilter, MarketRecord, PercentChange,
};
use quickcheck_macros::quickcheck;
use wasm_bindgen_test::*;

fn coin(id: &str, symbol: &str, name: &str) -> MarketRecord {
    MarketRecord {
        id: CoinId::from(id),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: format!("https://assets.example.com/{id}.png"),
        current_price: 1.0,
        market_cap: 1.0,
        total_volume: 1.0,
        price_change_percentage_24h: PercentChange::new(0.0),
        market_cap_rank: None,
        high_24h: 1.0,
        low_24h: 1.0,
    }
}

fn sample() -> Vec<MarketRecord> {
    vec![
        coin("bitcoin", "btc", "Bitcoin"),
        coin("ethereum", "eth", "Ethereum"),
        coin("tether", "usdt", "Tether"),
        coin("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin"),
    ]
}

fn ids(records: &[MarketRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.value()).collect()
}

#[wasm_bindgen_test]
fn matches_name_case_insensitively() {
    let found = MarketFilter::apply(&sample(), "BITCOIN");
    assert_eq!(ids(&found), vec!["bitcoin", "wrapped-bitcoin"]);
}

#[wasm_bindgen_test]
fn matches_symbol_substring() {
    let found = MarketFilter::apply(&sample(), "Usd");
    assert_eq!(ids(&found), vec!["tether"]);
}

#[wasm_bindgen_test]
fn no_match_is_empty() {
    assert!(MarketFilter::apply(&sample(), "dogecoin").is_empty());
}

#[wasm_bindgen_test]
fn empty_term_keeps_everything_in_order() {
    let markets = sample();
    assert_eq!(MarketFilter::apply(&markets, ""), markets);
}

#[quickcheck]
fn empty_term_is_identity(names: Vec<String>) -> bool {
    let markets: Vec<MarketRecord> =
        names.iter().enumerate().map(|(i, n)| coin(&i.to_string(), n, n)).collect();
    MarketFilter::apply(&markets, "") == markets
}

#[quickcheck]
fn every_match_contains_term(names: Vec<String>, term: String) -> bool {
    let markets: Vec<MarketRecord> =
        names.iter().enumerate().map(|(i, n)| coin(&i.to_string(), "x", n)).collect();
    let needle = term.to_lowercase();
    MarketFilter::apply(&markets, &term)
        .iter()
        .all(|m| m.name.to_lowercase().contains(&needle) || m.symbol.contains(&needle))
}

fn ascii_word(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[quickcheck]
fn returns_every_record_containing_term(entries: Vec<(String, bool)>, term: String) -> bool {
    let term = ascii_word(&term);
    let markets: Vec<MarketRecord> = entries
        .iter()
        .enumerate()
        .map(|(i, (prefix, embeds))| {
            let prefix = ascii_word(prefix);
            let name =
                if *embeds { format!("{prefix}{}", term.to_ascii_uppercase()) } else { prefix };
            coin(&i.to_string(), "-", &name)
        })
        .collect();

    let found: Vec<usize> = MarketFilter::apply(&markets, &term)
        .iter()
        .filter_map(|m| m.id.value().parse().ok())
        .collect();
    let in_order = found.windows(2).all(|pair| pair[0] < pair[1]);
    let complete = entries.iter().enumerate().all(|(i, (_, embeds))| !*embeds || found.contains(&i));
    in_order && complete
}

#[wasm_bindgen_test]
fn symbol_only_match_is_returned() {
    let markets = vec![coin("ripple", "xrp", "Ripple"), coin("tron", "trx", "TRON")];
    let found = MarketFilter::apply(&markets, "XR");
    assert_eq!(ids(&found), vec!["ripple"]);
}
