use crate::client::models::messages::Message;
use crate::common::models::{Category, Product};
use iced::widget::image;
use iced::Command;
use log::{error, info};
use std::collections::HashMap;

/// Fixed user-facing message shown when the catalog load fails, whatever
/// the underlying cause.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load products";

#[derive(Debug, Clone)]
pub struct StoreState {
    /// Catalog in server-provided order.
    pub products: Vec<Product>,
    /// True from construction until the one-shot load resolves.
    pub loading: bool,
    /// None = no error. Set at most once, on the failure path.
    pub error: Option<String>,
    pub category: Category,
    pub product_images: HashMap<i64, image::Handle>,
}

impl Default for StoreState {
    fn default() -> Self {
        StoreState {
            products: Vec::new(),
            loading: true,
            error: None,
            category: Category::All,
            product_images: HashMap::new(),
        }
    }
}

impl StoreState {
    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::NoOp => {}
            Message::ProductsLoaded { products } => {
                // Terminal transition: the loading flag drops on both the
                // success and the failure arm, never twice.
                self.loading = false;
                info!("catalog loaded: {} products", products.len());
                self.products = products;
                self.error = None;
            }
            Message::ProductsFailed { error } => {
                self.loading = false;
                error!("catalog load failed: {}", error);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
            Message::CategorySelected(category) => {
                self.category = category;
            }
            Message::ProductImageLoaded { product_id, handle } => {
                self.product_images.insert(product_id, handle);
            }
        }
        Command::none()
    }

    /// Products visible under the current filter, in catalog order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.category.filter(&self.products)
    }
}
