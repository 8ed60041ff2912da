use std::time::Duration;

use crate::domain::market_data::MarketsQuery;
use crate::domain::theme::THEME_STORAGE_KEY;
use crate::infrastructure::http::coingecko_rest_client::COINGECKO_API_BASE;

/// Refresh period between poll ticks
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Static dashboard settings; nothing here is user-configurable at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub query: MarketsQuery,
    pub refresh_interval: Duration,
    pub theme_storage_key: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: COINGECKO_API_BASE.to_string(),
            query: MarketsQuery::default(),
            refresh_interval: REFRESH_INTERVAL,
            theme_storage_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}
