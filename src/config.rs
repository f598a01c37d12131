// src/config.rs
use crate::errors::ConfigurationError;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Runtime configuration shared by the fetch client, both synchronizers and
/// the dashboard host. Passed explicitly at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint of the evaluation service, without trailing slash.
    pub api_base: String,

    /// Cadence of the "all expressions" view.
    pub list_interval: Duration,

    /// Cadence of a single-expression view. Shorter than the list cadence.
    pub detail_interval: Duration,

    /// Upper bound for one HTTP round trip.
    pub request_timeout: Duration,

    /// Address the dashboard host listens on.
    pub bind_addr: String,

    /// Detail views kept mounted at once.
    pub max_detail_views: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            list_interval: Duration::from_millis(5000),
            detail_interval: Duration::from_millis(2000),
            request_timeout: Duration::from_millis(10_000),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_detail_views: 32,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup. Unset keys fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base = lookup("CALC_API_BASE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base);
        if Url::parse(&api_base).is_err() {
            return Err(ConfigurationError::InvalidBaseUrl(api_base));
        }

        let list_interval =
            millis_setting(&lookup, "CALC_LIST_INTERVAL_MS")?.unwrap_or(defaults.list_interval);
        let detail_interval =
            millis_setting(&lookup, "CALC_DETAIL_INTERVAL_MS")?.unwrap_or(defaults.detail_interval);
        let request_timeout =
            millis_setting(&lookup, "CALC_REQUEST_TIMEOUT_MS")?.unwrap_or(defaults.request_timeout);

        let bind_addr = lookup("CALC_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let max_detail_views = match lookup("CALC_MAX_DETAIL_VIEWS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("CALC_MAX_DETAIL_VIEWS", raw)),
            },
            None => defaults.max_detail_views,
        };

        Ok(ClientConfig {
            api_base: api_base.trim_end_matches('/').to_string(),
            list_interval,
            detail_interval,
            request_timeout,
            bind_addr,
            max_detail_views,
        })
    }
}

/// Parses a positive millisecond count. Zero is rejected because a zero
/// period would spin the poll loop.
fn millis_setting<F>(lookup: &F, key: &str) -> Result<Option<Duration>, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => Ok(Some(Duration::from_millis(ms))),
            _ => Err(invalid(key, raw)),
        },
        None => Ok(None),
    }
}

fn invalid(key: &str, value: String) -> ConfigurationError {
    ConfigurationError::InvalidSetting {
        key: key.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.list_interval, Duration::from_secs(5));
        assert_eq!(config.detail_interval, Duration::from_secs(2));
        assert!(config.detail_interval < config.list_interval);
        assert_eq!(config.max_detail_views, 32);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("CALC_API_BASE", "http://calc.internal:9000/api/v1/"),
            ("CALC_LIST_INTERVAL_MS", "750"),
            ("CALC_DETAIL_INTERVAL_MS", "250"),
            ("CALC_BIND_ADDR", "0.0.0.0:8081"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://calc.internal:9000/api/v1");
        assert_eq!(config.list_interval, Duration::from_millis(750));
        assert_eq!(config.detail_interval, Duration::from_millis(250));
        assert_eq!(config.bind_addr, "0.0.0.0:8081");
    }

    #[test]
    fn test_rejects_bad_interval() {
        let err = ClientConfig::from_lookup(lookup_from(&[("CALC_LIST_INTERVAL_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidSetting { ref key, .. } if key == "CALC_LIST_INTERVAL_MS"
        ));

        let err = ClientConfig::from_lookup(lookup_from(&[("CALC_DETAIL_INTERVAL_MS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidSetting { .. }));
    }

    #[test]
    fn test_rejects_unparseable_base() {
        let err =
            ClientConfig::from_lookup(lookup_from(&[("CALC_API_BASE", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidBaseUrl(_)));
    }
}
