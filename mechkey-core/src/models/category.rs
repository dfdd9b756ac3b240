//! Category and filter facet types.

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of products in this category, when reported.
    #[serde(default)]
    pub products_count: Option<u32>,
}

/// Filter facets the backend offers for a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Keyboard sizes.
    pub sizes: Vec<String>,
    /// Switch types.
    pub switch_types: Vec<String>,
    /// Keycap profiles.
    pub profiles: Vec<String>,
    /// Materials.
    pub materials: Vec<String>,
    /// Accessory types.
    pub accessory_types: Vec<String>,
    /// Price bounds across matching products.
    pub price_range: Option<PriceRange>,
}

impl FilterOptions {
    /// Returns true if no facet has any value.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
            && self.switch_types.is_empty()
            && self.profiles.is_empty()
            && self.materials.is_empty()
            && self.accessory_types.is_empty()
            && self.price_range.is_none()
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest price.
    pub min: f64,
    /// Highest price.
    pub max: f64,
}
