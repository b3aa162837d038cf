use crate::client::config::ClientConfig;
use crate::common::models::Product;
use iced::widget::image;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid product payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Cancellation handle for an in-flight catalog fetch. Cancelling does not
/// abort the request, it only drops the outcome so a torn-down view is
/// never updated.
#[derive(Debug, Clone)]
pub struct FetchHandle {
    cancelled: Arc<AtomicBool>,
}

impl FetchHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// One-shot read access to the backend product catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogService {
    pub fn new(config: &ClientConfig) -> Self {
        CatalogService {
            http: reqwest::Client::new(),
            base_url: config.backend_url.clone(),
        }
    }

    /// Start the sample-catalog fetch. Returns the cancellation handle and
    /// the future producing the outcome; the future yields `None` when the
    /// handle was cancelled before completion.
    pub fn fetch_sample(
        &self,
    ) -> (
        FetchHandle,
        impl Future<Output = Option<Result<Vec<Product>, CatalogError>>> + Send + 'static,
    ) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let handle = FetchHandle {
            cancelled: cancelled.clone(),
        };
        let http = self.http.clone();
        let url = format!("{}/api/products/sample", self.base_url);

        let fut = async move {
            log::info!("fetching product sample from {}", url);
            let outcome = Self::request_sample(&http, &url).await;
            if cancelled.load(Ordering::Relaxed) {
                log::debug!("catalog fetch completed after cancellation, dropping outcome");
                return None;
            }
            Some(outcome)
        };

        (handle, fut)
    }

    async fn request_sample(
        http: &reqwest::Client,
        url: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let response = http.get(url).send().await?;
        // The status code is not checked: any resolved response whose body
        // decodes as a product list is treated as success.
        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        Ok(products)
    }

    /// Fetch one product image and wrap it for the image widget.
    pub async fn fetch_image(&self, url: &str) -> anyhow::Result<image::Handle> {
        let response = self.http.get(url).send().await?;
        let bytes = response.bytes().await?;
        Ok(image::Handle::from_memory(bytes.to_vec()))
    }
}
