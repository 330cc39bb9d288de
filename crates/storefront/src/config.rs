//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the core runs with zero configuration.
//!
//! - `OUD_EIRE_CART_KEY` - Storage key for the persisted cart
//!   (default: `oudEireCart`)
//! - `OUD_EIRE_SEARCH_DEBOUNCE_MS` - Quiescence window before a typed
//!   query executes (default: 300)
//! - `OUD_EIRE_SEARCH_LATENCY_MS` - Simulated result delivery latency,
//!   reserved for a future remote data source (default: 500)
//! - `OUD_EIRE_SEARCH_MIN_QUERY_LEN` - Minimum query length that
//!   triggers a search (default: 2)
//! - `OUD_EIRE_PREMIUM_PRICE_THRESHOLD` - Price above which a product
//!   counts as premium regardless of badge (default: 90)

use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Cart persistence configuration
    pub cart: CartConfig,
    /// Search behavior configuration
    pub search: SearchConfig,
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key under which the cart array is persisted
    pub storage_key: String,
}

/// Search behavior configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiescence window before a typed query executes
    pub debounce_window: Duration,
    /// Simulated delivery latency between execution and publication
    pub result_latency: Duration,
    /// Minimum query length (in characters) that triggers a search
    pub min_query_len: usize,
    /// Price threshold for the premium category predicate
    pub premium_threshold: Decimal,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: "oudEireCart".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(300),
            result_latency: Duration::from_millis(500),
            min_query_len: 2,
            premium_threshold: Decimal::from(90),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart: CartConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Every variable falls back to its default when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            cart: CartConfig {
                storage_key: get_env_or_default("OUD_EIRE_CART_KEY", "oudEireCart"),
            },
            search: SearchConfig {
                debounce_window: Duration::from_millis(get_parsed_env(
                    "OUD_EIRE_SEARCH_DEBOUNCE_MS",
                    300,
                )?),
                result_latency: Duration::from_millis(get_parsed_env(
                    "OUD_EIRE_SEARCH_LATENCY_MS",
                    500,
                )?),
                min_query_len: get_parsed_env("OUD_EIRE_SEARCH_MIN_QUERY_LEN", 2)?,
                premium_threshold: get_parsed_env(
                    "OUD_EIRE_PREMIUM_PRICE_THRESHOLD",
                    Decimal::from(90),
                )?,
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, falling back to a default when unset.
fn get_parsed_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.cart.storage_key, "oudEireCart");
        assert_eq!(config.search.debounce_window, Duration::from_millis(300));
        assert_eq!(config.search.result_latency, Duration::from_millis(500));
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.premium_threshold, Decimal::from(90));
    }

    #[test]
    fn test_get_parsed_env_unset_falls_back() {
        let value: u64 = get_parsed_env("OUD_EIRE_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_get_env_or_default_unset() {
        assert_eq!(
            get_env_or_default("OUD_EIRE_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
