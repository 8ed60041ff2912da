pub mod coingecko_rest_client;
pub mod dto;

pub use coingecko_rest_client::CoinGeckoRestClient;

use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, get_logger},
};
use gloo_net::http::Request;

/// HTTP client on top of gloo for WASM
#[derive(Clone, Debug)]
pub struct GlooHttpClient {
    default_headers: Vec<(String, String)>,
}

impl Default for GlooHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GlooHttpClient {
    pub fn new() -> Self {
        // Content-Type on a GET would force a CORS preflight
        Self { default_headers: vec![("Accept".to_string(), "application/json".to_string())] }
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// GET returning the body as text; any non-2xx status is an error.
    pub async fn get_text(&self, url: &str) -> NetworkResult<String> {
        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("🌐 GET: {url}"));

        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response =
            request.send().await.map_err(|e| AppError::network(format!("Request failed: {e}")))?;

        if !HttpUtils::is_success_status(response.status()) {
            get_logger().error(
                LogComponent::Infrastructure("HTTP"),
                &format!("HTTP error: {} - {}", response.status(), response.status_text()),
            );
            return Err(AppError::network("Failed to fetch data"));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Failed to read response: {e}")))?;

        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("✅ GET response: {} bytes", text.len()),
        );

        Ok(text)
    }
}

/// Helpers for building requests
pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Append `params` to `base_url` keeping their order.
    pub fn build_url_with_params(base_url: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Minimal encoding for the characters that break a query string
    pub fn url_encode(input: &str) -> String {
        input
            .replace('%', "%25")
            .replace(' ', "%20")
            .replace('&', "%26")
            .replace('=', "%3D")
            .replace('?', "%3F")
            .replace('#', "%23")
    }
}
