use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::Product;
use crate::traits::{ListQuery, ProductApi};

const PRODUCTS_PATH: &str = "/seller/products";

/// `reqwest`-backed [`ProductApi`] for the seller endpoints.
#[derive(Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("stylehub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn products_url(&self, query: &ListQuery) -> String {
        let mut url = format!("{}{PRODUCTS_PATH}", self.base_url);
        if let Some(params) = query.to_query_string() {
            url.push('?');
            url.push_str(&params);
        }
        url
    }

    pub fn product_url(&self, id: &str) -> String {
        format!(
            "{}{PRODUCTS_PATH}/{}",
            self.base_url,
            urlencoding::encode(id)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::from_reqwest(url, &e))
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>, ApiError> {
        let url = self.products_url(query);
        self.get_json(&url).await
    }

    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let url = self.product_url(id);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpProductApi {
        let config = Config::new("https://shop.example/").unwrap();
        HttpProductApi::new(&config).unwrap()
    }

    #[test]
    fn listing_url_without_filters() {
        assert_eq!(
            api().products_url(&ListQuery::default()),
            "https://shop.example/seller/products"
        );
    }

    #[test]
    fn listing_url_with_category() {
        let query = ListQuery::default().in_category("5");
        assert_eq!(
            api().products_url(&query),
            "https://shop.example/seller/products?category_id=5"
        );
    }

    #[test]
    fn product_id_is_a_single_path_segment() {
        assert_eq!(
            api().product_url("a/b"),
            "https://shop.example/seller/products/a%2Fb"
        );
    }
}
