//! Shared library behind the catalog demo binaries: two read-only resource
//! services (`products-api`, `categories-api`) and the `storefront` client
//! that aggregates them.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{AppError, AppResult};
