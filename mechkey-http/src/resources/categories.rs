//! Storefront category endpoints.

use mechkey_core::{Category, FilterOptions};
use tracing::error;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::query::QueryParams;
use crate::response::Envelope;

/// Storefront category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoriesApi<'a> {
    /// Creates the API over a client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists all categories.
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let body: Envelope<Vec<Category>> = self
            .client
            .get("categories", &QueryParams::new())
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching categories"))?;
        Ok(body.into_inner())
    }

    /// Fetches the filter facets for a category, or for the whole catalog.
    pub async fn filter_options(&self, category: Option<&str>) -> Result<FilterOptions, ApiError> {
        let query = QueryParams::new().with_opt("category", category);

        let body: Envelope<FilterOptions> = self
            .client
            .get("filter-options", &query)
            .await
            .inspect_err(|e| error!(category, error = %e, "Error fetching filter options"))?;
        Ok(body.into_inner())
    }
}
