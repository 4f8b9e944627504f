//! Traits and request options for talking to the seller API

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::Product;

/// Options for the product listing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Sort directive passed through to the API as `sort_by`
    pub sort_by: Option<String>,
    /// Category filter passed through as `category_id`
    pub category_id: Option<String>,
}

impl ListQuery {
    pub fn sorted_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Query string for the listing URL, without the leading `?`.
    ///
    /// A parameter is only emitted when it carries a non-empty value.
    ///
    /// # Returns
    /// * `Option<String>` - `None` when no parameter applies
    pub fn to_query_string(&self) -> Option<String> {
        let params: Vec<String> = [
            ("sort_by", self.sort_by.as_deref()),
            ("category_id", self.category_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(value) if !value.is_empty() => {
                Some(format!("{key}={}", urlencoding::encode(value)))
            }
            _ => None,
        })
        .collect();

        if params.is_empty() {
            None
        } else {
            Some(params.join("&"))
        }
    }
}

/// The two read endpoints the storefront depends on
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the product listing
    ///
    /// # Arguments
    /// * `query` - Optional sort and category filter
    ///
    /// # Returns
    /// * `Result<Vec<Product>, ApiError>` - Products in the order the API returned them
    async fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>, ApiError>;

    /// Fetch a single product by id
    async fn get_product(&self, id: &str) -> Result<Product, ApiError>;
}
