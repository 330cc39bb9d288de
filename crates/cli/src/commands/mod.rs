//! CLI command implementations.
//!
//! Each command plays the presentation collaborator's role: it drives
//! the storefront core's operations and renders the resulting snapshots
//! as text.

pub mod cart;
pub mod catalog;
pub mod search;

use std::path::PathBuf;

use thiserror::Error;

use oud_eire_storefront::catalog::ProductCatalog;
use oud_eire_storefront::config::StorefrontConfig;
use oud_eire_storefront::error::AppError;

/// The sample catalog bundled with the CLI (the presentation layer's
/// stand-in for the catalog a page would supply at startup).
const CATALOG_JSON: &str = include_str!("../../catalog.json");

/// Errors that can occur during CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// The named product is not in the catalog.
    #[error("No such product in the catalog: {0}")]
    UnknownProduct(String),

    /// The search session task exited before delivering a result.
    #[error("Search session closed unexpectedly")]
    SessionClosed,

    /// Storefront core error (config, catalog, storage).
    #[error(transparent)]
    App(#[from] AppError),
}

/// Directory for the file-backed cart store.
pub(crate) fn data_dir() -> PathBuf {
    std::env::var("OUD_EIRE_DATA_DIR")
        .map_or_else(|_| PathBuf::from(".oud-eire"), PathBuf::from)
}

/// Load configuration and the bundled catalog.
pub(crate) fn load_config_and_catalog() -> Result<(StorefrontConfig, ProductCatalog), CliError> {
    let config = StorefrontConfig::from_env().map_err(AppError::from)?;
    let catalog = ProductCatalog::from_json(CATALOG_JSON).map_err(AppError::from)?;
    Ok((config, catalog))
}
