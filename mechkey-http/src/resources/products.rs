//! Storefront product endpoints.

use std::fmt;
use std::str::FromStr;

use mechkey_core::{Product, ProductListing};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::query::QueryParams;
use crate::response::Envelope;

/// Default sort column.
pub const DEFAULT_SORT_BY: &str = "created_at";

/// Default page size.
pub const DEFAULT_PER_PAGE: u32 = 12;

// ============================================================================
// Filters
// ============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order: {other} (expected asc or desc)")),
        }
    }
}

/// Filters for the product listing.
///
/// Every field is optional; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilters {
    /// Category slug.
    pub category: Option<String>,
    /// Keyboard size.
    pub size: Option<String>,
    /// Switch type.
    pub switch_type: Option<String>,
    /// Keycap profile.
    pub profile: Option<String>,
    /// Material.
    pub material: Option<String>,
    /// Accessory type.
    pub accessory_type: Option<String>,
    /// Lower price bound.
    pub min_price: Option<f64>,
    /// Upper price bound.
    pub max_price: Option<f64>,
    /// Only list products with stock.
    pub in_stock_only: bool,
    /// Free-text search.
    pub search: Option<String>,
    /// Sort column; defaults to `created_at`.
    pub sort_by: Option<String>,
    /// Sort direction; defaults to descending.
    pub sort_order: Option<SortOrder>,
    /// Request a paginated response.
    pub paginate: bool,
    /// Page size; defaults to 12.
    pub per_page: Option<u32>,
}

impl ProductFilters {
    /// Normalizes the filters into query parameters.
    pub fn to_query(&self) -> QueryParams {
        let sort_by = self
            .sort_by
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SORT_BY);

        QueryParams::new()
            .with_opt("category", self.category.as_deref())
            .with_opt("size", self.size.as_deref())
            .with_opt("switch_type", self.switch_type.as_deref())
            .with_opt("profile", self.profile.as_deref())
            .with_opt("material", self.material.as_deref())
            .with_opt("accessory_type", self.accessory_type.as_deref())
            .with_opt("min_price", self.min_price)
            .with_opt("max_price", self.max_price)
            .with_flag("in_stock_only", self.in_stock_only)
            .with_opt("search", self.search.as_deref())
            .with("sort_by", sort_by)
            .with("sort_order", self.sort_order.unwrap_or_default())
            .with_flag("paginate", self.paginate)
            .with("per_page", self.per_page.unwrap_or(DEFAULT_PER_PAGE))
    }
}

// ============================================================================
// Products API
// ============================================================================

/// Product list body: a listing, or a listing wrapped in `data`.
///
/// A bare paginator also has a `data` field, so the listing is tried first.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingBody {
    Listing(ProductListing),
    Wrapped { data: ProductListing },
}

impl ListingBody {
    fn into_listing(self) -> ProductListing {
        match self {
            ListingBody::Listing(listing) | ListingBody::Wrapped { data: listing } => listing,
        }
    }
}

/// Storefront product endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    /// Creates the API over a client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists products matching `filters`.
    pub async fn list(&self, filters: &ProductFilters) -> Result<ProductListing, ApiError> {
        let query = filters.to_query();
        debug!(params = query.len(), "Fetching products");

        let body: ListingBody = self
            .client
            .get("products", &query)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching products"))?;
        Ok(body.into_listing())
    }

    /// Fetches a single product by slug.
    pub async fn get_by_slug(&self, slug: &str, include_related: bool) -> Result<Product, ApiError> {
        let query = QueryParams::new().with_flag("include_related", include_related);

        let body: Envelope<Product> = self
            .client
            .get(&format!("products/{slug}"), &query)
            .await
            .inspect_err(|e| error!(slug, error = %e, "Error fetching product"))?;
        Ok(body.into_inner())
    }

    /// Searches products by free text.
    pub async fn search(&self, text: &str) -> Result<ProductListing, ApiError> {
        let query = QueryParams::new().with("search", text);

        let body: ListingBody = self
            .client
            .get("products", &query)
            .await
            .inspect_err(|e| error!(error = %e, "Error searching products"))?;
        Ok(body.into_listing())
    }
}
