//! Environment configuration for the terminal.
//!
//! | Variable | Default |
//! |---|---|
//! | `POS_API_URL` | `http://localhost:8000` |
//! | `POS_REQUEST_TIMEOUT_SECS` | `30` |
//! | `POS_CART_BUFFER` | `32` |
//! | `POS_TOP_SELLING_LIMIT` | `5` |

use std::{env, fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

pub const API_URL_KEY: &str = "POS_API_URL";
pub const REQUEST_TIMEOUT_KEY: &str = "POS_REQUEST_TIMEOUT_SECS";
pub const CART_BUFFER_KEY: &str = "POS_CART_BUFFER";
pub const TOP_SELLING_LIMIT_KEY: &str = "POS_TOP_SELLING_LIMIT";

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "30";
const DEFAULT_CART_BUFFER: &str = "32";
const DEFAULT_TOP_SELLING_LIMIT: &str = "5";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PosConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Capacity of the cart engine's request channel.
    pub cart_buffer: usize,
    pub top_selling_limit: u32,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            cart_buffer: 32,
            top_selling_limit: 5,
        }
    }
}

impl PosConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url: String = try_load(&lookup, API_URL_KEY, DEFAULT_API_URL)?;
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(invalid(API_URL_KEY, &api_base_url, "expected an http(s) URL"));
        }

        let timeout_secs: u64 = try_load(&lookup, REQUEST_TIMEOUT_KEY, DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let cart_buffer: usize = try_load(&lookup, CART_BUFFER_KEY, DEFAULT_CART_BUFFER)?;
        if cart_buffer == 0 {
            return Err(invalid(CART_BUFFER_KEY, "0", "must be at least 1"));
        }

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            cart_buffer,
            top_selling_limit: try_load(&lookup, TOP_SELLING_LIMIT_KEY, DEFAULT_TOP_SELLING_LIMIT)?,
        })
    }
}

fn invalid(key: &str, value: &str, reason: impl Display) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        invalid(key, &value, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<PosConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PosConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]), Ok(PosConfig::default()));
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            (API_URL_KEY, "https://pos.example.com/api/"),
            (REQUEST_TIMEOUT_KEY, "5"),
            (CART_BUFFER_KEY, "8"),
        ])
        .unwrap();

        assert_eq!(config.api_base_url, "https://pos.example.com/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.cart_buffer, 8);
        assert_eq!(config.top_selling_limit, 5);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[(REQUEST_TIMEOUT_KEY, "soon")]),
            Err(ConfigError::Invalid { key, .. }) if key == REQUEST_TIMEOUT_KEY
        ));
        assert!(load(&[(CART_BUFFER_KEY, "0")]).is_err());
        assert!(load(&[(API_URL_KEY, "localhost:8000")]).is_err());
    }
}
