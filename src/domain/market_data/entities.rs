pub use super::value_objects::{CoinId, PercentChange};
use serde::{Deserialize, Serialize};

/// Domain entity - one coin's market snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub price_change_percentage_24h: PercentChange,
    pub market_cap_rank: Option<u32>,
    pub high_24h: f64,
    pub low_24h: f64,
}

impl MarketRecord {
    /// Ticker as shown in the table (`btc` -> `BTC`)
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    pub fn change_24h(&self) -> f64 {
        self.price_change_percentage_24h.value()
    }

    /// Case-insensitive substring match on name or symbol.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}
