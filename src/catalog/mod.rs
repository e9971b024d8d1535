// Catalog module: remote source, consolidated fallback data and the adapter
// that hides failures from everything downstream.

pub mod fallback;
pub mod fetcher;
pub mod traits;

pub use fallback::fallback_products;
pub use fetcher::HttpCatalog;
pub use traits::CatalogSource;

use crate::model::Product;
use std::sync::Arc;
use tracing::warn;

/// Always yields a product list: the live one when the source answers,
/// the built-in one otherwise. Nothing is cached between calls.
#[derive(Clone)]
pub struct CatalogAdapter {
    source: Arc<dyn CatalogSource>,
}

impl CatalogAdapter {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn products(&self) -> Vec<Product> {
        match self.source.list_products().await {
            Ok(products) => products,
            Err(e) => {
                warn!("Catalog unavailable, using fallback products: {}", e);
                fallback_products()
            }
        }
    }
}
