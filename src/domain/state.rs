use std::sync::Arc;

use crate::domain::errors::AppError;
use crate::domain::market_data::MarketRecord;

/// What the dashboard body should show
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    /// Nothing received yet and the first fetch is still running.
    InitialLoading,
    Failed(String),
    Ready,
}

/// Fetch-driven dashboard state.
///
/// The list is shared behind an `Arc` and swapped wholesale on success.
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub markets: Arc<Vec<MarketRecord>>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { markets: Arc::new(Vec::new()), loading: true, refreshing: false, error: None }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Last write wins; a failure keeps the previous list.
    pub fn apply_result(&mut self, result: Result<Vec<MarketRecord>, AppError>) {
        match result {
            Ok(markets) => {
                self.markets = Arc::new(markets);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        self.refreshing = false;
    }

    pub fn phase(&self) -> ViewPhase {
        if self.loading && self.markets.is_empty() {
            ViewPhase::InitialLoading
        } else if let Some(message) = &self.error {
            ViewPhase::Failed(message.clone())
        } else {
            ViewPhase::Ready
        }
    }
}
