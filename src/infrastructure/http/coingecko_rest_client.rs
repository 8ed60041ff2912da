use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, get_logger},
    market_data::{MarketDataRepository, MarketRecord, MarketsQuery},
};
use crate::infrastructure::http::{GlooHttpClient, HttpUtils, dto::CoinGeckoMarketDto};

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// REST client for the CoinGecko markets endpoint
#[derive(Clone, Debug)]
pub struct CoinGeckoRestClient {
    http: GlooHttpClient,
    base_url: String,
    query: MarketsQuery,
}

impl Default for CoinGeckoRestClient {
    fn default() -> Self {
        Self::new(COINGECKO_API_BASE, MarketsQuery::default())
    }
}

impl CoinGeckoRestClient {
    pub fn new(base_url: impl Into<String>, query: MarketsQuery) -> Self {
        Self { http: GlooHttpClient::new(), base_url: base_url.into(), query }
    }

    pub fn markets_url(&self) -> String {
        let endpoint = format!("{}/coins/markets", self.base_url.trim_end_matches('/'));
        HttpUtils::build_url_with_params(&endpoint, &self.query.to_query_params())
    }

    /// Decode a `/coins/markets` body; anything but a JSON array of coins fails.
    pub fn parse_markets_response(body: &str) -> NetworkResult<Vec<MarketRecord>> {
        let coins: Vec<CoinGeckoMarketDto> = serde_json::from_str(body)
            .map_err(|e| AppError::network(format!("Failed to parse JSON: {e}")))?;
        Ok(coins.into_iter().map(CoinGeckoMarketDto::to_domain_record).collect())
    }
}

impl MarketDataRepository for CoinGeckoRestClient {
    async fn fetch_markets(&self) -> NetworkResult<Vec<MarketRecord>> {
        let url = self.markets_url();
        get_logger().info(
            LogComponent::Infrastructure("CoinGeckoAPI"),
            &format!("📈 Fetching markets from: {url}"),
        );

        let body = self.http.get_text(&url).await?;
        let markets = Self::parse_markets_response(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("CoinGeckoAPI"),
            &format!("✅ Loaded {} market records", markets.len()),
        );

        Ok(markets)
    }
}
