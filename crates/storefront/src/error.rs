//! Unified error handling.
//!
//! The error taxonomy here is deliberately thin: corrupt persisted data
//! and persistence-write failures are recovered inside the cart module
//! (logged, never raised), and absence of search matches is a state,
//! not an error. What remains is configuration and catalog loading,
//! which the driving binary surfaces at startup.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog loading failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Storage backend failed outside the cart's best-effort path.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config(ConfigError::InvalidEnvVar(
            "OUD_EIRE_SEARCH_DEBOUNCE_MS".to_string(),
            "invalid digit".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable OUD_EIRE_SEARCH_DEBOUNCE_MS: invalid digit"
        );
    }
}
