use crate::domain::{
    errors::NetworkResult,
    logging::{LogComponent, get_logger},
    market_data::{MarketDataRepository, MarketRecord},
    state::DashboardState,
};

/// Use Case: one fetch of the markets list
#[derive(Clone)]
pub struct RefreshMarketsUseCase<R> {
    repository: R,
}

impl<R: MarketDataRepository> RefreshMarketsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch once; no retry, the caller decides what to show.
    pub async fn execute(&self) -> NetworkResult<Vec<MarketRecord>> {
        get_logger().debug(LogComponent::Application("RefreshMarkets"), "🔄 Refreshing markets");

        let result = self.repository.fetch_markets().await;
        match &result {
            Ok(markets) => get_logger().info(
                LogComponent::Application("RefreshMarkets"),
                &format!("✅ Refreshed {} markets", markets.len()),
            ),
            Err(e) => get_logger().error(
                LogComponent::Application("RefreshMarkets"),
                &format!("❌ Refresh failed: {e}"),
            ),
        }
        result
    }

    /// Run a full refresh cycle against plain state.
    pub async fn refresh(&self, state: &mut DashboardState) {
        state.begin_refresh();
        let result = self.execute().await;
        state.apply_result(result);
    }
}
