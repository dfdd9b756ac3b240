//! Resource APIs: one thin wrapper per backend resource.
//!
//! Each operation issues exactly one request through [`crate::ApiClient`],
//! logs failures, and returns them to the caller unchanged.

mod admin;
mod categories;
mod products;

pub use admin::{AdminCategoriesApi, AdminProductsApi};
pub use categories::CategoriesApi;
pub use products::{ProductFilters, ProductsApi, SortOrder};
