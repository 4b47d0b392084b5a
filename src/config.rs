//! Runtime Configuration
//!
//! Backend location, request timeout and log level.

use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Name of the optional JS object the host page can define before the bundle loads.
const WINDOW_CONFIG_KEY: &str = "__KITCHEN_ADMIN_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve config: `window.__KITCHEN_ADMIN_CONFIG__`, then the
    /// `KITCHEN_API_URL` build variable, then defaults.
    pub fn load() -> Self {
        let from_window = web_sys::window()
            .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok())
            .filter(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| serde_wasm_bindgen::from_value::<ApiConfig>(value).ok());

        let config = match from_window {
            Some(config) => config,
            None => match option_env!("KITCHEN_API_URL") {
                Some(url) => ApiConfig { base_url: url.to_string(), ..Default::default() },
                None => ApiConfig::default(),
            },
        };
        config.normalized()
    }

    /// Trim trailing slashes and replace unusable values with defaults.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        if self.timeout_ms == 0 {
            self.timeout_ms = DEFAULT_TIMEOUT_MS;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_object_keeps_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"base_url":"http://127.0.0.1:8000/"}"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_ms, 20_000);
    }

    #[test]
    fn test_normalize_rejects_unusable_values() {
        let config = ApiConfig {
            base_url: "  /  ".into(),
            timeout_ms: 0,
            log_level: "chatty".into(),
        }
        .normalized();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_level_filter_parses_known_levels() {
        let config = ApiConfig { log_level: "debug".into(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }
}
