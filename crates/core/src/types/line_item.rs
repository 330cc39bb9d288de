//! Cart line item record.

use serde::{Deserialize, Serialize};

use crate::types::id::LineItemId;
use crate::types::price::Price;
use crate::types::product::Product;

/// One row in the cart: a distinct product name and its quantity.
///
/// `name`, `price`, and `image` are copied from the product at add-time;
/// a later catalog price change does not retroactively affect items
/// already in the cart. `quantity` is at least 1 while the item exists -
/// reaching 0 deletes the line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Line item identity, assigned when the item is first added.
    pub id: LineItemId,
    /// Product display name, frozen at add-time.
    pub name: String,
    /// Unit price, frozen at add-time.
    pub price: Price,
    /// Image reference, frozen at add-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line item for a product being added for the first time.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: LineItemId::generate(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// The line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::badge::Badge;
    use crate::types::id::ProductId;
    use rust_decimal::dec;

    fn product() -> Product {
        Product {
            id: ProductId::new(6),
            name: "Oud Najdia - Lattafa".to_string(),
            description: "Exotic saffron blended with precious oud.".to_string(),
            price: Price::new(dec!(25.00)),
            image: Some("images/perfume6.jpg".to_string()),
            badge: Some(Badge::Luxury),
        }
    }

    #[test]
    fn test_from_product_starts_at_quantity_one() {
        let item = CartLineItem::from_product(&product());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.name, "Oud Najdia - Lattafa");
        assert_eq!(item.price, Price::new(dec!(25.00)));
        assert_eq!(item.image.as_deref(), Some("images/perfume6.jpg"));
    }

    #[test]
    fn test_line_item_id_is_not_product_id() {
        // Line items get a fresh identity; two adds of distinct products
        // with the same name would merge by name, not by product id.
        let a = CartLineItem::from_product(&product());
        let b = CartLineItem::from_product(&product());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_line_total() {
        let mut item = CartLineItem::from_product(&product());
        item.quantity = 3;
        assert_eq!(item.line_total(), Price::new(dec!(75.00)));
    }

    #[test]
    fn test_json_roundtrip_preserves_all_fields() {
        let mut item = CartLineItem::from_product(&product());
        item.quantity = 2;
        let json = serde_json::to_string(&item).unwrap();
        let back: CartLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
