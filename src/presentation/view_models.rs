use crate::domain::market_data::{MarketRecord, MarketStats};
use crate::format_utils::{format_currency, format_percentage};

/// Pre-formatted table row
#[derive(Debug, Clone, PartialEq)]
pub struct MarketRowView {
    pub id: String,
    pub rank: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub price: String,
    pub change: String,
    pub is_gain: bool,
    pub market_cap: String,
    pub volume: String,
}

impl From<&MarketRecord> for MarketRowView {
    fn from(record: &MarketRecord) -> Self {
        Self {
            id: record.id.value().to_string(),
            rank: record.market_cap_rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
            name: record.name.clone(),
            symbol: record.display_symbol(),
            image: record.image.clone(),
            price: format_currency(record.current_price, true),
            change: format_percentage(record.change_24h()),
            is_gain: record.price_change_percentage_24h.is_gain(),
            market_cap: format_currency(record.market_cap, true),
            volume: format_currency(record.total_volume, true),
        }
    }
}

impl MarketRowView {
    /// Row for coin `id` in the current table, if it is still visible.
    pub fn find<'a>(rows: &'a [MarketRowView], id: &str) -> Option<&'a MarketRowView> {
        rows.iter().find(|row| row.id == id)
    }

    pub fn change_class(&self) -> &'static str {
        if self.is_gain { "gain" } else { "loss" }
    }

    pub fn trend_icon(&self) -> &'static str {
        if self.is_gain { "▲" } else { "▼" }
    }
}

/// Pre-formatted stats cards
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub total_market_cap: String,
    pub total_volume: String,
    pub top_gainer_symbol: String,
    pub top_gainer_image: String,
    pub top_gainer_change: String,
}

impl From<&MarketStats> for StatsView {
    fn from(stats: &MarketStats) -> Self {
        Self {
            total_market_cap: format_currency(stats.total_market_cap, true),
            total_volume: format_currency(stats.total_volume, true),
            top_gainer_symbol: stats.top_gainer.display_symbol(),
            top_gainer_image: stats.top_gainer.image.clone(),
            top_gainer_change: format_percentage(stats.top_gainer.change_24h()),
        }
    }
}
