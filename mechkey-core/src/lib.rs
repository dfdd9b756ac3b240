// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `MechKey` Core
//!
//! Core types, models, and traits for the `MechKey` storefront client.
//!
//! This crate provides the foundational abstractions used across all other
//! `MechKey` crates, including:
//!
//! - Domain models (products, categories, cart line items, admin session)
//! - Error types
//! - The key-value persistence port and an in-memory implementation
//! - The client-side route table and its navigation guard
//! - Price formatting
//!
//! ## Key Types
//!
//! ### Catalog
//! - [`Product`] - A product as returned by the storefront API
//! - [`Category`] - A product category
//! - [`ProductListing`] - Plain or paginated product list
//! - [`FilterOptions`] - Facets available for a category
//!
//! ### Cart & Session
//! - [`CartLineItem`] - One product entry in the cart
//! - [`AdminSession`] - Authenticated/anonymous admin state
//!
//! ### Admin Payloads
//! - [`ProductInput`], [`CategoryInput`], [`StockUpdate`]
//!
//! ### Ports
//! - [`KeyValueStorage`] - Persisted string storage keyed by name
//! - [`SessionState`] - Read access to the admin session for route guards

pub mod error;
pub mod models;
pub mod money;
pub mod routes;
pub mod storage;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Admin payloads
    CategoryInput,
    ProductInput,
    StockUpdate,
    // Cart
    CartLineItem,
    // Catalog
    Category,
    CategoryRef,
    FilterOptions,
    Page,
    PriceRange,
    Product,
    ProductListing,
    StockStatus,
    // Session
    AdminSession,
    AdminUser,
};

pub use money::format_idr;
pub use routes::{Navigation, Route, resolve};
pub use storage::{MemoryStorage, keys, load_json, save_json};

// Re-export traits
pub use traits::{KeyValueStorage, SessionState};
