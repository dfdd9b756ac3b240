//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod categories;
pub mod config;
pub mod products;
pub mod route;
