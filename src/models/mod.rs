//! Data models for products returned by the seller API

use serde::{Deserialize, Deserializer, Serialize};

/// Highest star rating a product can display
pub const MAX_STARS: usize = 5;

/// A product listing as served by `/seller/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
    /// Image URLs in display order
    #[serde(rename = "image", default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub details: Option<ProductDetails>,
}

/// Extra copy shown below the fold on the detail page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub care: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
}

impl Product {
    /// Percentage off the original price, rounded to the nearest whole number.
    ///
    /// Returns 0 when there is no original price, when it is not positive, or
    /// when the current price is not below it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn discount_percentage(&self) -> u32 {
        match self.original_price {
            Some(original) if original > 0.0 => {
                let pct = ((1.0 - self.price / original) * 100.0).round();
                if pct > 0.0 { pct as u32 } else { 0 }
            }
            _ => 0,
        }
    }

    /// Number of filled stars out of [`MAX_STARS`]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn filled_stars(&self) -> usize {
        self.rating
            .map_or(0, |rating| rating.floor().clamp(0.0, MAX_STARS as f64) as usize)
    }
}

/// The API is not consistent about ids: accept `"42"` and `42` alike.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}
