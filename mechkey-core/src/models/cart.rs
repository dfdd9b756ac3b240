//! Cart line item type.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One product entry in the cart.
///
/// Display fields are snapshotted from the product when it is first added,
/// so the cart renders consistently even if the catalog changes afterwards.
///
/// ## Invariants
/// - `quantity >= 1` while the item is in the cart
/// - `quantity <= stock_quantity` whenever the stock is positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product ID; at most one line item per product.
    pub id: u64,
    /// Product name at time of adding.
    pub name: String,
    /// Product slug at time of adding.
    pub slug: String,
    /// Unit price at time of adding.
    pub price: f64,
    /// Product image at time of adding.
    #[serde(default)]
    pub image: Option<String>,
    /// Category name at time of adding.
    #[serde(default)]
    pub category: String,
    /// Quantity in cart.
    pub quantity: u32,
    /// Stock count at time of adding; the quantity ceiling.
    #[serde(default)]
    pub stock_quantity: Option<u32>,
    /// Whether the product was orderable at time of adding.
    #[serde(default)]
    pub in_stock: bool,
}

impl CartLineItem {
    /// Creates a line item from a product snapshot.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category_name().to_string(),
            quantity,
            stock_quantity: product.stock_quantity,
            in_stock: product.in_stock,
        }
    }

    /// Returns the quantity ceiling. Zero or missing stock means unbounded.
    pub fn stock_ceiling(&self) -> Option<u32> {
        self.stock_quantity.filter(|&q| q > 0)
    }

    /// Returns true if the quantity has reached the stock ceiling.
    pub fn is_at_ceiling(&self) -> bool {
        self.stock_ceiling().is_some_and(|max| self.quantity >= max)
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRef;

    fn keycaps() -> Product {
        Product {
            id: 7,
            name: "GMK Olivia".to_string(),
            slug: "gmk-olivia".to_string(),
            description: Some("Pink and black".to_string()),
            price: 1_850_000.0,
            image: Some("olivia.png".to_string()),
            category: Some(CategoryRef {
                id: Some(3),
                name: "Keycaps".to_string(),
                slug: Some("keycaps".to_string()),
            }),
            stock_quantity: Some(4),
            in_stock: true,
            stock_status: None,
            size: None,
            switch_type: None,
            profile: Some("cherry".to_string()),
            material: Some("ABS".to_string()),
            accessory_type: None,
            related_products: Vec::new(),
        }
    }

    #[test]
    fn test_from_product_snapshots_fields() {
        let item = CartLineItem::from_product(&keycaps(), 2);
        assert_eq!(item.id, 7);
        assert_eq!(item.category, "Keycaps");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.stock_quantity, Some(4));
        assert!((item.line_total() - 3_700_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_is_at_ceiling() {
        let mut item = CartLineItem::from_product(&keycaps(), 4);
        assert!(item.is_at_ceiling());

        item.quantity = 3;
        assert!(!item.is_at_ceiling());

        item.stock_quantity = Some(0);
        item.quantity = 100;
        assert!(!item.is_at_ceiling());
    }
}
