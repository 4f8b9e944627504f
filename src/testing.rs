//! Scripted [`ProductApi`] used by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::error::ApiError;
use crate::models::Product;
use crate::traits::{ListQuery, ProductApi};

type Scripted<T> = (Option<Arc<Notify>>, Result<T, ApiError>);

#[derive(Default)]
pub struct FakeApi {
    listings: Mutex<VecDeque<Scripted<Vec<Product>>>>,
    products: Mutex<HashMap<String, VecDeque<Scripted<Product>>>>,
    queries: Mutex<Vec<ListQuery>>,
    product_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_listing(&self, response: Result<Vec<Product>, ApiError>) {
        self.listings.lock().unwrap().push_back((None, response));
    }

    /// Queue a listing response that is held back until the returned gate is notified.
    pub fn push_gated_listing(&self, response: Result<Vec<Product>, ApiError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.listings
            .lock()
            .unwrap()
            .push_back((Some(gate.clone()), response));
        gate
    }

    pub fn push_product(&self, id: &str, response: Result<Product, ApiError>) {
        self.products
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_default()
            .push_back((None, response));
    }

    pub fn push_gated_product(&self, id: &str, response: Result<Product, ApiError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.products
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_default()
            .push_back((Some(gate.clone()), response));
        gate
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn product_calls(&self) -> Vec<String> {
        self.product_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductApi for FakeApi {
    async fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        let (gate, response) = self
            .listings
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted listing request");

        if let Some(gate) = gate {
            gate.notified().await;
        }
        response
    }

    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        self.product_calls.lock().unwrap().push(id.to_string());
        let (gate, response) = self
            .products
            .lock()
            .unwrap()
            .get_mut(id)
            .and_then(VecDeque::pop_front)
            .expect("unscripted product request");

        if let Some(gate) = gate {
            gate.notified().await;
        }
        response
    }
}

pub fn product(id: &str, images: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        brand: Some("Northline".to_string()),
        price: 800.0,
        original_price: Some(1000.0),
        description: "Relaxed fit.".to_string(),
        rating: Some(4.2),
        reviews: Some(12),
        images: images.iter().map(ToString::to_string).collect(),
        details: None,
    }
}

pub fn not_found(id: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        url: format!("http://fake/seller/products/{id}"),
    }
}

pub fn connection_refused() -> ApiError {
    ApiError::Transport {
        url: "http://fake/seller/products".to_string(),
        message: "connection refused".to_string(),
    }
}
