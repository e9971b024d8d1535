use crate::model::{CatalogError, Product};

#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}
