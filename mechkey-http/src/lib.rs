// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! # `MechKey` HTTP
//!
//! HTTP access to the `MechKey` storefront backend.
//!
//! ## Client
//!
//! [`ApiClient`] wraps `reqwest` with the storefront's conventions:
//!
//! - fixed base URL, JSON headers, and a 10 second timeout
//! - `Authorization: Bearer <token>` from the `auth_token` storage key
//! - 401 responses clear the stored token; 404 and 500 are logged
//! - no retries: every failure is returned as an [`ApiError`]
//!
//! ## Resources
//!
//! - [`ProductsApi`] - list, fetch by slug, search
//! - [`CategoriesApi`] - list, filter facets
//! - [`AdminProductsApi`] - create, update, delete, bulk stock
//! - [`AdminCategoriesApi`] - create, update, delete
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mechkey_core::MemoryStorage;
//! use mechkey_http::{ApiClient, ClientSettings, ProductFilters};
//!
//! let client = ApiClient::new(&ClientSettings::default(), Arc::new(MemoryStorage::new()))?;
//! let filters = ProductFilters { category: Some("switches".into()), ..Default::default() };
//! let listing = client.products().list(&filters).await?;
//! ```

pub mod client;
pub mod error;
pub mod query;
pub mod resources;
pub mod response;

// Re-export key types at crate root
pub use client::{ApiClient, ClientSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use query::{QueryParams, build_query_string};
pub use resources::{
    AdminCategoriesApi, AdminProductsApi, CategoriesApi, ProductFilters, ProductsApi, SortOrder,
};
pub use response::{Acknowledgement, Envelope};
