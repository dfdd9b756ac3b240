//! Domain models for `MechKey`.
//!
//! This module contains the data structures exchanged with the storefront
//! API and persisted by the client stores.
//!
//! ## Submodules
//!
//! - [`product`] - Products, listings, and pagination
//! - [`category`] - Categories and filter facets
//! - [`cart`] - Cart line items
//! - [`session`] - Admin session and profile
//! - [`admin`] - Payloads for admin mutations

mod admin;
mod cart;
mod category;
mod product;
mod session;

// Re-export everything at the models level
pub use admin::{CategoryInput, ProductInput, StockUpdate};
pub use cart::CartLineItem;
pub use category::{Category, FilterOptions, PriceRange};
pub use product::{CategoryRef, Page, Product, ProductListing, StockStatus};
pub use session::{AdminSession, AdminUser};
#[cfg(test)]
mod serde_tests;
