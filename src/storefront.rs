use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::client::HttpProductApi;
use crate::config::Config;
use crate::error::ApiError;
use crate::loader::{DetailLoader, DetailState};
use crate::render;
use crate::store::ProductStore;
use crate::traits::{ListQuery, ProductApi};
use crate::ui::{Gallery, NavMenu, Quantity};

/// Application root: owns the API client and the shared product store, and
/// hands out pages that borrow them.
#[derive(Clone)]
pub struct Storefront {
    api: Arc<dyn ProductApi>,
    store: Arc<ProductStore>,
}

impl Storefront {
    pub fn new(config: &Config) -> Result<Self> {
        info!("Using product API at {}", config.base_url());
        let api = HttpProductApi::new(config)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn ProductApi>) -> Self {
        let store = Arc::new(ProductStore::new(api.clone()));
        Self { api, store }
    }

    pub fn store(&self) -> &Arc<ProductStore> {
        &self.store
    }

    pub fn listing_page(&self) -> ListingPage {
        ListingPage {
            store: self.store.clone(),
            menu: NavMenu::default(),
        }
    }

    pub fn detail_page(&self) -> DetailPage {
        DetailPage {
            loader: Arc::new(DetailLoader::new(self.api.clone())),
            gallery: Gallery::default(),
            quantity: Quantity::default(),
            shown: None,
        }
    }
}

pub struct ListingPage {
    store: Arc<ProductStore>,
    pub menu: NavMenu,
}

impl ListingPage {
    pub async fn mount(&self, query: &ListQuery) -> Result<usize, ApiError> {
        self.store.fetch_products(query).await
    }

    pub fn render(&self) -> String {
        render::listing(&self.store.snapshot())
    }
}

/// Detail page state: one loader plus the gallery and quantity widgets that
/// follow whatever product it holds.
pub struct DetailPage {
    loader: Arc<DetailLoader>,
    gallery: Gallery,
    quantity: Quantity,
    /// Id of the product the gallery was last reset for
    shown: Option<String>,
}

impl DetailPage {
    /// Points the page at `id`, fetching it if needed.
    pub async fn navigate(&mut self, id: &str) {
        self.loader.navigate(id).await;
        self.sync_from_loader();
    }

    /// Re-derives the gallery from the loader, for callers that drive the
    /// loader directly. The gallery goes back to the first image whenever the
    /// loaded product changes.
    pub fn sync_from_loader(&mut self) {
        let state = self.loader.state();
        let loaded = state.product.as_ref().map(|product| product.id.as_str());
        if loaded == self.shown.as_deref() {
            return;
        }

        let images = state
            .product
            .as_ref()
            .map_or(&[][..], |product| product.images.as_slice());
        self.gallery.reset(images);
        self.shown = loaded.map(ToString::to_string);
    }

    pub fn loader(&self) -> &Arc<DetailLoader> {
        &self.loader
    }

    pub fn state(&self) -> DetailState {
        self.loader.state()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn select_image(&mut self, position: usize) -> bool {
        self.gallery.select(position)
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn quantity_mut(&mut self) -> &mut Quantity {
        &mut self.quantity
    }

    pub fn render(&self) -> String {
        render::detail(&self.loader.state(), &self.gallery, self.quantity)
    }
}
