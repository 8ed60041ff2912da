use crate::domain::errors::NetworkResult;
use crate::domain::market_data::MarketRecord;

/// Source of market snapshots
#[allow(async_fn_in_trait)]
pub trait MarketDataRepository {
    /// Fetch the full list; replaces whatever the caller held before.
    async fn fetch_markets(&self) -> NetworkResult<Vec<MarketRecord>>;
}
