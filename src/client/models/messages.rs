use crate::common::models::{Category, Product};
use iced::widget::image;

#[derive(Debug, Clone)]
pub enum Message {
    // No operation - used when an async completion has nothing to apply
    NoOp,
    // Catalog load outcome (exactly one of the two per run)
    ProductsLoaded { products: Vec<Product> },
    ProductsFailed { error: String },
    // User picked a filter category
    CategorySelected(Category),
    // Product art arrived for one card
    ProductImageLoaded { product_id: i64, handle: image::Handle },
}
