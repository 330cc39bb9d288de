//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::badge::Badge;
use crate::types::id::ProductId;
use crate::types::price::Price;

/// A product as supplied by the catalog.
///
/// Products are immutable for the lifetime of a session; `id` values are
/// unique within a catalog. `image` is optional and its absence is a
/// normal state (the presentation layer shows a placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name. Also the de-facto cart deduplication key.
    pub name: String,
    /// Free-text description, searchable.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Optional image reference (URI or icon token).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional classification badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "id": 4,
            "name": "Badee al Oud - Lattafa",
            "description": "Floral rose notes intertwined with smoky oud.",
            "price": "30.00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.price, Price::new(dec!(30.00)));
        assert!(product.image.is_none());
        assert!(product.badge.is_none());
    }

    #[test]
    fn test_deserialize_with_badge() {
        let json = r#"{
            "id": 1,
            "name": "Yara - Lataffa",
            "description": "A rich, woody scent with hints of amber and spice.",
            "price": "30.00",
            "image": "images/perfume1.jpg",
            "badge": "Bestseller"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.badge, Some(Badge::Bestseller));
        assert_eq!(product.image.as_deref(), Some("images/perfume1.jpg"));
    }
}
