use wasm_bindgen::JsValue;

use crate::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider, get_logger};

/// Console logger implementation for WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = JsValue::from_str(&entry.format_line());
        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Wall clock from `Date.now()`
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// Browser facts the theme depends on
pub struct BrowserEnvironment;

impl BrowserEnvironment {
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";

    /// `false` when there is no window or the query is unsupported.
    pub fn prefers_dark_scheme() -> bool {
        web_sys::window()
            .and_then(|window| window.match_media(Self::DARK_SCHEME_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    /// Toggle the `dark` class on `<html>`.
    pub fn apply_theme_class(dark_mode: bool) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };

        if let Err(e) = root.class_list().toggle_with_force("dark", dark_mode) {
            get_logger().warn(
                LogComponent::Infrastructure("Theme"),
                &format!("Failed to toggle dark class: {e:?}"),
            );
        }
    }
}
