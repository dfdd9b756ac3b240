//! Payloads for admin product and category mutations.

use serde::{Deserialize, Serialize};

/// Fields for creating or updating a product.
///
/// Unset fields are omitted from the request body, so an update only touches
/// the fields that are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL slug; the backend derives one from the name when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Long description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price in IDR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Owning category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// Units in stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<u32>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Keyboard size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Switch type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_type: Option<String>,
    /// Keycap profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Accessory type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory_type: Option<String>,
    /// Whether the product is listed in the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Fields for creating or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single entry of a bulk stock update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    /// Product ID.
    pub id: u64,
    /// New stock count.
    pub stock_quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_input_omits_unset_fields() {
        let input = ProductInput {
            price: Some(450_000.0),
            stock_quantity: Some(12),
            ..ProductInput::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["stock_quantity"], 12);
    }
}
