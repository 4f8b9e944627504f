//! Storefront client for the seller product API: a product store for the
//! listing page, a detail loader for single products, the local view state
//! around them, and text renderings of both pages.

pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod render;
pub mod store;
pub mod storefront;
pub mod traits;
pub mod ui;

#[cfg(test)]
mod testing;

pub use client::HttpProductApi;
pub use config::Config;
pub use error::{ApiError, ConfigError};
pub use loader::{DetailLoader, DetailState, FetchStatus};
pub use models::{Product, ProductDetails};
pub use store::{Catalog, ProductStore};
pub use storefront::{DetailPage, ListingPage, Storefront};
pub use traits::{ListQuery, ProductApi};
