//! Read-only product catalog.
//!
//! The catalog is an ordered sequence of products supplied once at
//! startup by a collaborator (the CLI bundles one as JSON). It is
//! immutable for the lifetime of a session; search results preserve its
//! order.

use thiserror::Error;
use tracing::debug;

use oud_eire_core::{Product, ProductId};

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Two catalog entries share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// An ordered, read-only sequence of products.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Create a catalog from an ordered list of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two entries share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        debug!(count = products.len(), "Catalog loaded");
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or ids collide.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by exact display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use oud_eire_core::{Badge, Price};
    use rust_decimal::dec;

    fn product(id: i32, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: Price::new(dec!(30.00)),
            image: None,
            badge: Some(Badge::New),
        }
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = ProductCatalog::new(vec![product(1, "a"), product(1, "b")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"[
            {"id": 2, "name": "Cherry Gold - Brandy Designs",
             "description": "Warm amber notes blended with Irish moss and oud.",
             "price": "25.00", "badge": "New"},
            {"id": 1, "name": "Yara - Lataffa",
             "description": "A rich, woody scent with hints of amber and spice.",
             "price": "30.00", "badge": "Bestseller"}
        ]"#;
        let catalog = ProductCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let names: Vec<_> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Cherry Gold - Brandy Designs", "Yara - Lataffa"]);
    }

    #[test]
    fn test_lookups() {
        let catalog = ProductCatalog::new(vec![product(1, "Yara - Lataffa")]).unwrap();
        assert!(catalog.get(ProductId::new(1)).is_some());
        assert!(catalog.get(ProductId::new(9)).is_none());
        assert!(catalog.find_by_name("Yara - Lataffa").is_some());
        // Name matching is exact and case-sensitive.
        assert!(catalog.find_by_name("yara - lataffa").is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(ProductCatalog::from_json("not json").is_err());
    }
}
