//! Client-side product search.
//!
//! [`SearchIndex`] is the stateless matching engine: substring search
//! over name/description/badge text and predicate search over category
//! tokens, both preserving catalog order. [`session::SearchSession`]
//! wraps it with the transient interaction state - debouncing, the
//! four-view state machine, supersession of stale queries.
//!
//! Nothing in this module can fail in the error sense: absence of
//! matches is the Empty view, an unrecognized category token falls back
//! to the whole catalog.

pub mod session;

use rust_decimal::Decimal;
use tracing::debug;

use oud_eire_core::{Badge, Product};

use crate::catalog::ProductCatalog;
use crate::config::SearchConfig;

/// A fixed, closed-set category token selecting a predicate over the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Products badged `Bestseller`.
    Bestsellers,
    /// Products badged `New`.
    New,
    /// Products badged `Premium`, or priced above the luxury threshold.
    Premium,
    /// Defined fallback for unrecognized tokens: the entire catalog.
    #[default]
    All,
}

impl Category {
    /// Parse a category token. Unrecognized tokens map to [`Self::All`],
    /// not an error.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "bestsellers" => Self::Bestsellers,
            "new" => Self::New,
            "premium" => Self::Premium,
            _ => Self::All,
        }
    }

    /// The token string for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bestsellers => "bestsellers",
            Self::New => "new",
            Self::Premium => "premium",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stateless predicate-matching engine over the product catalog.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    catalog: ProductCatalog,
    premium_threshold: Decimal,
}

impl SearchIndex {
    /// Create an index over `catalog`.
    #[must_use]
    pub fn new(catalog: ProductCatalog, config: &SearchConfig) -> Self {
        Self {
            catalog,
            premium_threshold: config.premium_threshold,
        }
    }

    /// The catalog this index searches over.
    #[must_use]
    pub const fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Case-insensitive substring search over the concatenation of each
    /// product's name, description, and badge.
    ///
    /// The query is trimmed at the edges. Catalog order is preserved.
    /// An empty needle matches everything by substring semantics; the
    /// session layer is responsible for treating an empty query as the
    /// idle state rather than a search.
    #[must_use]
    pub fn search_by_text(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        let results: Vec<Product> = self
            .catalog
            .products()
            .iter()
            .filter(|product| searchable_text(product).contains(&needle))
            .cloned()
            .collect();
        debug!(query = %needle, matches = results.len(), "Text search executed");
        results
    }

    /// Predicate search over a category token, preserving catalog order.
    #[must_use]
    pub fn search_by_category(&self, category: Category) -> Vec<Product> {
        let results: Vec<Product> = self
            .catalog
            .products()
            .iter()
            .filter(|product| self.matches_category(product, category))
            .cloned()
            .collect();
        debug!(category = %category, matches = results.len(), "Category search executed");
        results
    }

    fn matches_category(&self, product: &Product, category: Category) -> bool {
        match category {
            Category::Bestsellers => product.badge == Some(Badge::Bestseller),
            Category::New => product.badge == Some(Badge::New),
            Category::Premium => {
                product.badge == Some(Badge::Premium)
                    || product.price.amount() > self.premium_threshold
            }
            Category::All => true,
        }
    }
}

/// The text a product is matched against: name, description, and badge
/// (absent badge contributes nothing), lowercased.
fn searchable_text(product: &Product) -> String {
    let badge = product.badge.map(Badge::as_str).unwrap_or_default();
    format!("{} {} {}", product.name, product.description, badge).to_lowercase()
}
