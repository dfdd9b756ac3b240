//! Product types.
//!
//! This module contains the catalog types returned by the products API:
//! - [`Product`] - A single product
//! - [`CategoryRef`] - The category embedded in a product
//! - [`StockStatus`] - Backend-computed stock badge
//! - [`ProductListing`] - Plain or paginated product list
//! - [`Page`] - A page of results

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Product
// ============================================================================

/// A product as returned by the storefront API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug, unique per product.
    pub slug: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in IDR (no minor unit).
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Owning category.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Units in stock. `None` when the backend does not track stock.
    #[serde(default)]
    pub stock_quantity: Option<u32>,
    /// Whether the product can be ordered.
    #[serde(default)]
    pub in_stock: bool,
    /// Stock badge computed by the backend.
    #[serde(default)]
    pub stock_status: Option<StockStatus>,
    /// Keyboard size (e.g. "65%").
    #[serde(default)]
    pub size: Option<String>,
    /// Switch type (e.g. "linear").
    #[serde(default)]
    pub switch_type: Option<String>,
    /// Keycap profile (e.g. "cherry").
    #[serde(default)]
    pub profile: Option<String>,
    /// Case or keycap material.
    #[serde(default)]
    pub material: Option<String>,
    /// Accessory type for the accessories category.
    #[serde(default)]
    pub accessory_type: Option<String>,
    /// Related products, only present when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_products: Vec<Product>,
}

impl Product {
    /// Returns the category name, or an empty string if the product has none.
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.name.as_str())
    }

    /// Returns the stock ceiling for cart quantities.
    ///
    /// A missing or zero stock quantity means no ceiling applies.
    pub fn stock_ceiling(&self) -> Option<u32> {
        self.stock_quantity.filter(|&q| q > 0)
    }
}

/// The category embedded in a product payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category ID.
    #[serde(default)]
    pub id: Option<u64>,
    /// Category name.
    pub name: String,
    /// Category slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Stock badge computed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockStatus {
    /// Machine-readable status (e.g. "in_stock", "low_stock").
    pub status: Option<String>,
    /// Human-readable label.
    pub label: Option<String>,
    /// Badge color: "green", "yellow", or "red".
    pub color: Option<String>,
}

/// Accepts prices sent either as JSON numbers or as numeric strings.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {s:?}"))),
    }
}

// ============================================================================
// Listings
// ============================================================================

/// One page of paginated results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// 1-based page number.
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Last available page.
    #[serde(default)]
    pub last_page: Option<u32>,
    /// Page size.
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Total number of matching items.
    #[serde(default)]
    pub total: Option<u64>,
}

/// A product list, paginated or not depending on the `paginate` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductListing {
    /// Paginated response.
    Paginated(Page<Product>),
    /// Plain list.
    List(Vec<Product>),
}

impl ProductListing {
    /// Returns the products in this listing.
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Paginated(page) => &page.data,
            Self::List(items) => items,
        }
    }

    /// Consumes the listing and returns its products.
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Paginated(page) => page.data,
            Self::List(items) => items,
        }
    }

    /// Returns the total match count when the backend reports one.
    pub fn total(&self) -> Option<u64> {
        match self {
            Self::Paginated(page) => page.total,
            Self::List(_) => None,
        }
    }

    /// Returns the number of products in this listing.
    pub fn len(&self) -> usize {
        self.products().len()
    }

    /// Returns true if the listing holds no products.
    pub fn is_empty(&self) -> bool {
        self.products().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
