// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! # `MechKey` Store
//!
//! State for the `MechKey` storefront client.
//!
//! This crate provides:
//!
//! - **CartStore**: cart line items with stock clamping and derived totals
//! - **AuthStore**: admin session with a replaceable credential check
//! - **FileStorage**: one JSON file per storage key
//! - **Config**: API and storage settings with environment overrides
//!
//! Both stores take the storage port at construction and notify
//! subscribers through watch channels.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use mechkey_store::{CartStore, FileStorage};
//!
//! let storage = Arc::new(FileStorage::open_default()?);
//! let cart = CartStore::load(storage);
//!
//! let outcome = cart.add_item(&product, 1);
//! println!("{} ({})", outcome.message(), cart.formatted_total());
//!
//! let mut rx = cart.subscribe();
//! while rx.changed().await.is_ok() {
//!     println!("Cart updated!");
//! }
//! ```

pub mod auth_store;
pub mod cart_store;
pub mod config;
pub mod error;
pub mod outcome;
pub mod persistence;

pub use auth_store::{AuthStore, CredentialVerifier, DemoCredentials};
pub use cart_store::CartStore;
pub use config::{ApiConfig, Config, StorageConfig};
pub use error::StoreError;
pub use outcome::ActionOutcome;
pub use persistence::{
    FileStorage, default_config_dir, default_config_path, default_data_dir, ensure_dir,
};
