//! # Product Store
//!
//! Owns the product list shown on the listing page, together with the
//! visitor's wishlist. The store is created once and handed to whoever needs
//! it; there is no global instance.
//!
//! Every successful fetch replaces the list wholesale. A failed fetch is
//! logged and returned to the caller, and the list keeps whatever it held
//! before. Overlapping fetches are not deduplicated or cancelled: the
//! response that arrives last is the one that sticks.
//!
//! State lives in a [`tokio::sync::watch`] channel so renderers can
//! [`subscribe`](ProductStore::subscribe) and redraw on each replacement.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{error, info};

use crate::error::ApiError;
use crate::models::Product;
use crate::traits::{ListQuery, ProductApi};

/// Everything the listing page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    /// Wishlisted product ids, oldest first
    pub wishlist: Vec<String>,
    /// When `products` was last replaced
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.wishlist.iter().any(|w| w == id)
    }
}

pub struct ProductStore {
    api: Arc<dyn ProductApi>,
    state: watch::Sender<Catalog>,
}

impl ProductStore {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        let (state, _) = watch::channel(Catalog::default());
        Self { api, state }
    }

    /// Fetches the listing and replaces the stored products with it.
    ///
    /// # Returns
    /// * `Ok(count)` - number of products now in the store
    /// * `Err(ApiError)` - the fetch failed; the stored list is unchanged
    pub async fn fetch_products(&self, query: &ListQuery) -> Result<usize, ApiError> {
        info!("Fetching products ({query:?})");

        match self.api.list_products(query).await {
            Ok(products) => {
                let count = products.len();
                self.state.send_modify(|catalog| {
                    catalog.products = products;
                    catalog.fetched_at = Some(Utc::now());
                });
                info!("Loaded {count} products");
                Ok(count)
            }
            Err(e) => {
                error!("Failed to fetch products: {e}");
                Err(e)
            }
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    pub fn snapshot(&self) -> Catalog {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Catalog> {
        self.state.subscribe()
    }

    /// Adds the id to the wishlist, or removes it if already there.
    ///
    /// Returns `true` when the product is wishlisted after the call.
    pub fn toggle_wishlist(&self, id: &str) -> bool {
        let mut wishlisted = false;
        self.state.send_modify(|catalog| {
            if let Some(pos) = catalog.wishlist.iter().position(|w| w == id) {
                catalog.wishlist.remove(pos);
            } else {
                catalog.wishlist.push(id.to_string());
                wishlisted = true;
            }
        });
        wishlisted
    }

    /// Wishlists the id unless it already is. Returns `true` if it was added.
    pub fn add_to_wishlist(&self, id: &str) -> bool {
        self.state.send_if_modified(|catalog| {
            if catalog.is_wishlisted(id) {
                false
            } else {
                catalog.wishlist.push(id.to_string());
                true
            }
        })
    }

    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.state.borrow().is_wishlisted(id)
    }

    pub fn wishlist(&self) -> Vec<String> {
        self.state.borrow().wishlist.clone()
    }

    /// Drops products, wishlist and fetch time.
    pub fn reset(&self) {
        self.state.send_replace(Catalog::default());
    }
}
