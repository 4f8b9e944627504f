//! Detail loader: fetches one product for the detail page and tracks the
//! request status.
//!
//! Status moves `Idle -> Loading -> {Success, Error}`. It goes back to
//! `Loading` only when a new identifier is requested. Each load takes a
//! generation number, and a response is applied only if its generation is
//! still the newest. A slow response for a product the visitor has already
//! navigated away from is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::models::Product;
use crate::traits::ProductApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FetchStatus {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Error(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    /// Identifier of the most recent request
    pub id: Option<String>,
    pub status: FetchStatus,
    /// Product from the last successful fetch for `id`
    pub product: Option<Product>,
}

pub struct DetailLoader {
    api: Arc<dyn ProductApi>,
    state: watch::Sender<DetailState>,
    generation: AtomicU64,
}

impl DetailLoader {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            api,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches `id` unconditionally. An empty id does nothing.
    pub async fn load_product(&self, id: &str) {
        if id.is_empty() {
            debug!("No product id, skipping fetch");
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            if state.id.as_deref() != Some(id) {
                state.product = None;
            }
            state.id = Some(id.to_string());
            state.status = FetchStatus::Loading;
        });

        let result = self.api.get_product(id).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Dropping stale response for product {id}");
            return;
        }

        self.state.send_modify(|state| match result {
            Ok(product) => {
                info!("Loaded product {id}: {}", product.name);
                state.product = Some(product);
                state.status = FetchStatus::Success;
            }
            Err(e) => {
                error!("Error fetching product {id}: {e}");
                state.status = FetchStatus::Error(e.to_string());
            }
        });
    }

    /// Loads `id` if it differs from the current one or has not been
    /// fetched yet. A settled result for the same id is kept.
    pub async fn navigate(&self, id: &str) {
        let current = {
            let state = self.state.borrow();
            state.id.as_deref() == Some(id) && state.status != FetchStatus::Idle
        };

        if current {
            debug!("Product {id} already requested");
            return;
        }
        self.load_product(id).await;
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.borrow().status.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }
}
