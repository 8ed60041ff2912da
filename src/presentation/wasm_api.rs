use wasm_bindgen::prelude::*;

use crate::format_utils;

/// JS bindings for the pure formatters, so page scripts render numbers the
/// same way the dashboard does.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(num: f64, is_currency: Option<bool>) -> String {
    format_utils::format_currency(num, is_currency.unwrap_or(true))
}

#[wasm_bindgen(js_name = formatPercentage)]
pub fn format_percentage(num: f64) -> String {
    format_utils::format_percentage(num)
}

/// Trigger an out-of-band refresh, same as the retry button.
#[cfg(not(feature = "logic-only"))]
#[wasm_bindgen(js_name = refreshMarkets)]
pub fn refresh_markets() {
    crate::app::request_refresh();
}
