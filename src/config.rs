//! Client configuration.
//!
//! Resolved from the environment after `.env` has been loaded.

use std::time::Duration;

/// Default backend origin and path prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8021/usr/";

/// Keychain service name used for session entries.
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "com.board.client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub keychain_service: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
            keychain_service: DEFAULT_KEYCHAIN_SERVICE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build from `BOARD_API_URL` and `BOARD_KEYCHAIN_SERVICE`, falling back
    /// to the defaults for anything unset or empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            base_url: non_empty("BOARD_API_URL").unwrap_or(defaults.base_url),
            keychain_service: non_empty("BOARD_KEYCHAIN_SERVICE")
                .unwrap_or(defaults.keychain_service),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:8021/usr/");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(|name| match name {
            "BOARD_API_URL" => Some("https://board.example.com/usr/".into()),
            "BOARD_KEYCHAIN_SERVICE" => Some("test.service".into()),
            _ => None,
        });
        assert_eq!(config.base_url, "https://board.example.com/usr/");
        assert_eq!(config.keychain_service, "test.service");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_blank_value_falls_back() {
        let config = ClientConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
