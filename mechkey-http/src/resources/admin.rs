//! Admin product and category endpoints.

use mechkey_core::{Category, CategoryInput, Product, ProductInput, StockUpdate};
use serde::Serialize;
use tracing::{error, info};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::response::{Acknowledgement, Envelope};

/// Body of the bulk stock endpoint.
#[derive(Serialize)]
struct BulkStockBody<'a> {
    updates: &'a [StockUpdate],
}

// ============================================================================
// Admin Products
// ============================================================================

/// Admin product endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AdminProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminProductsApi<'a> {
    /// Creates the API over a client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Creates a product.
    pub async fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let body: Envelope<Product> = self
            .client
            .post("admin/products", input)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating product"))?;
        let product = body.into_inner();
        info!(product_id = product.id, slug = %product.slug, "Product created");
        Ok(product)
    }

    /// Updates a product.
    pub async fn update(&self, id: u64, input: &ProductInput) -> Result<Product, ApiError> {
        let body: Envelope<Product> = self
            .client
            .put(&format!("admin/products/{id}"), input)
            .await
            .inspect_err(|e| error!(product_id = id, error = %e, "Error updating product"))?;
        info!(product_id = id, "Product updated");
        Ok(body.into_inner())
    }

    /// Deletes a product.
    pub async fn delete(&self, id: u64) -> Result<Acknowledgement, ApiError> {
        let ack: Acknowledgement = self
            .client
            .delete(&format!("admin/products/{id}"))
            .await
            .inspect_err(|e| error!(product_id = id, error = %e, "Error deleting product"))?;
        info!(product_id = id, success = ack.success, "Product delete acknowledged");
        Ok(ack)
    }

    /// Sets stock counts for several products at once.
    pub async fn bulk_update_stock(
        &self,
        updates: &[StockUpdate],
    ) -> Result<Acknowledgement, ApiError> {
        let ack: Acknowledgement = self
            .client
            .post("admin/products/bulk-update-stock", &BulkStockBody { updates })
            .await
            .inspect_err(|e| error!(count = updates.len(), error = %e, "Error bulk updating stock"))?;
        info!(count = updates.len(), success = ack.success, "Bulk stock update acknowledged");
        Ok(ack)
    }
}

// ============================================================================
// Admin Categories
// ============================================================================

/// Admin category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AdminCategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminCategoriesApi<'a> {
    /// Creates the API over a client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Creates a category.
    pub async fn create(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        let body: Envelope<Category> = self
            .client
            .post("admin/categories", input)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating category"))?;
        let category = body.into_inner();
        info!(category_id = category.id, slug = %category.slug, "Category created");
        Ok(category)
    }

    /// Updates a category.
    pub async fn update(&self, id: u64, input: &CategoryInput) -> Result<Category, ApiError> {
        let body: Envelope<Category> = self
            .client
            .put(&format!("admin/categories/{id}"), input)
            .await
            .inspect_err(|e| error!(category_id = id, error = %e, "Error updating category"))?;
        info!(category_id = id, "Category updated");
        Ok(body.into_inner())
    }

    /// Deletes a category.
    pub async fn delete(&self, id: u64) -> Result<Acknowledgement, ApiError> {
        let ack: Acknowledgement = self
            .client
            .delete(&format!("admin/categories/{id}"))
            .await
            .inspect_err(|e| error!(category_id = id, error = %e, "Error deleting category"))?;
        info!(category_id = id, success = ack.success, "Category delete acknowledged");
        Ok(ack)
    }
}
