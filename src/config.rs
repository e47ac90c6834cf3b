//! Build-time Configuration
//!
//! Values are baked in by `option_env!` when Trunk compiles the wasm bundle.

use std::str::FromStr;

use log::Level;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Frontend configuration, provided to components via context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash requirements
    pub api_url: &'static str,
    /// Minimum level forwarded to the browser console
    pub log_level: Level,
}

impl AppConfig {
    /// Read `TODO_API_URL` and `TODO_LOG_LEVEL` captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&'static str>, log_level: Option<&str>) -> Self {
        Self {
            api_url: api_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_API_URL),
            log_level: parse_level(log_level),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://todo.example.com"), Some("debug"));
        assert_eq!(config.api_url, "https://todo.example.com");
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn test_blank_or_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("loud"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_level_is_case_insensitive() {
        assert_eq!(parse_level(Some("WARN")), Level::Warn);
        assert_eq!(parse_level(Some(" trace ")), Level::Trace);
    }
}
