//! # Text Surfaces
//!
//! Terminal renderings of the storefront pages. They read state and produce
//! strings; nothing here fetches or mutates.
//!
//! - **Listing**: a header with the product and wishlist counts, then one
//!   line per product with price, discount badge and a wishlist heart.
//! - **Detail**: the loading, error and not-found branches, or the full
//!   product view with gallery position, quantity selector and the details
//!   section.
//! - **Loading indicator**: an `indicatif` spinner shown while a request is
//!   in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::loader::{DetailState, FetchStatus};
use crate::models::{MAX_STARS, Product};
use crate::store::Catalog;
use crate::ui::{Gallery, Quantity};

const CURRENCY: &str = "₹";

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{CURRENCY}{price:.0}")
    } else {
        format!("{CURRENCY}{price:.2}")
    }
}

pub fn stars(product: &Product) -> String {
    let filled = product.filled_stars();
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
}

fn price_line(product: &Product) -> String {
    let mut line = format_price(product.price);
    let discount = product.discount_percentage();
    if discount > 0 {
        line.push_str(&format!("  {discount}% OFF"));
    }
    line
}

/// The product grid on the home page.
pub fn listing(catalog: &Catalog) -> String {
    if catalog.products.is_empty() {
        return "No products found".to_string();
    }

    let mut lines = vec![format!(
        "{} products  ♥ {}",
        catalog.products.len(),
        catalog.wishlist.len()
    )];
    for product in &catalog.products {
        let heart = if catalog.is_wishlisted(&product.id) { "♥" } else { "♡" };
        let brand = product
            .brand
            .as_deref()
            .map(|b| format!(" ({b})"))
            .unwrap_or_default();
        lines.push(format!(
            "{heart} [{}] {}{brand}  {}",
            product.id,
            product.name,
            price_line(product)
        ));
    }
    lines.join("\n")
}

/// The detail page, picking the branch from the loader status.
pub fn detail(state: &DetailState, gallery: &Gallery, quantity: Quantity) -> String {
    match (&state.status, &state.product) {
        (FetchStatus::Loading, _) => "Loading product...".to_string(),
        (FetchStatus::Error(message), _) => format!("Error loading product\n{message}"),
        (_, None) => "Product not found".to_string(),
        (_, Some(product)) => product_view(product, gallery, quantity),
    }
}

fn product_view(product: &Product, gallery: &Gallery, quantity: Quantity) -> String {
    let mut lines = Vec::new();

    if let Some(brand) = &product.brand {
        lines.push(brand.to_uppercase());
    }
    lines.push(product.name.clone());

    let mut rating = stars(product);
    if let Some(value) = product.rating {
        rating.push_str(&format!(" {value}"));
        if let Some(reviews) = product.reviews {
            rating.push_str(&format!(" ({reviews} reviews)"));
        }
    }
    lines.push(rating);

    if let Some(original) = product.original_price {
        lines.push(format!("Original Price: {}", format_price(original)));
    }
    lines.push(price_line(product));

    match (gallery.selected(), gallery.current_image()) {
        (Some(position), Some(url)) => {
            lines.push(format!("Image {position}/{}: {url}", gallery.images().len()));
        }
        _ => lines.push("No Image Available".to_string()),
    }
    if gallery.shows_thumbnails() {
        let thumbs: Vec<String> = (1..=gallery.images().len())
            .map(|n| {
                if gallery.selected() == Some(n) {
                    format!("[{n}]")
                } else {
                    n.to_string()
                }
            })
            .collect();
        lines.push(format!("Thumbnails: {}", thumbs.join(" ")));
    }

    lines.push(String::new());
    lines.push("About this item:".to_string());
    if !product.description.is_empty() {
        lines.push(format!("  {}", product.description));
    }
    lines.push(format!(
        "  > Brand: {}",
        product.brand.as_deref().unwrap_or("N/A")
    ));
    lines.push("  > Available: In stock".to_string());
    lines.push("  > Shipping: Free delivery".to_string());
    lines.push("  > Returns: 30-day return policy".to_string());

    lines.push(String::new());
    let minus = if quantity.can_decrement() { "[-]" } else { "[ ]" };
    let plus = if quantity.can_increment() { "[+]" } else { "[ ]" };
    lines.push(format!(
        "Quantity: {minus} {} {plus}  (Max {} items)",
        quantity.value(),
        Quantity::MAX
    ));

    if let Some(details) = &product.details {
        lines.push(String::new());
        lines.push("Product Details".to_string());
        if let Some(composition) = &details.composition {
            let care = details.care.as_deref().unwrap_or_default();
            lines.push(format!("  Composition & Care: {composition}. {care}"));
        }
        if let Some(delivery) = &details.delivery {
            lines.push(format!(
                "  Delivery & Return: {delivery}. Free returns within 30 days."
            ));
        }
    }

    lines.join("\n")
}

/// Spinner shown while a request is outstanding. Hidden when disabled so
/// piped output stays clean.
pub fn spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
