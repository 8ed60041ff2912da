use serde::Deserialize;

use crate::domain::market_data::{CoinId, MarketRecord, PercentChange};

/// DTO for one entry of `/coins/markets`.
///
/// Numeric fields are nullable upstream (fresh listings, delisted pairs).
#[derive(Debug, Deserialize)]
pub struct CoinGeckoMarketDto {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
}

impl CoinGeckoMarketDto {
    /// Missing numbers become zero, missing rank stays `None`.
    pub fn to_domain_record(self) -> MarketRecord {
        MarketRecord {
            id: CoinId::from(self.id),
            symbol: self.symbol,
            name: self.name,
            image: self.image.unwrap_or_default(),
            current_price: self.current_price.unwrap_or(0.0),
            market_cap: self.market_cap.unwrap_or(0.0),
            total_volume: self.total_volume.unwrap_or(0.0),
            price_change_percentage_24h: PercentChange::new(
                self.price_change_percentage_24h.unwrap_or(0.0),
            ),
            market_cap_rank: self.market_cap_rank,
            high_24h: self.high_24h.unwrap_or(0.0),
            low_24h: self.low_24h.unwrap_or(0.0),
        }
    }
}
