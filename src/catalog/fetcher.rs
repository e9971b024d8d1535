use crate::catalog::traits::CatalogSource;
use crate::config::AppConfig;
use crate::model::{CatalogError, Product};
use crate::normalizer::normalize_all;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

/// Remote product catalog reached over `GET /api/products?size=N`.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    page_size: u32,
    timeout: Duration,
}

impl HttpCatalog {
    pub fn new(base_url: &str, page_size: u32, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(concat!("pc-budget-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
            timeout,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(&config.catalog_url, config.catalog_page_size, config.catalog_timeout())
    }

    fn build_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    async fn fetch_payload(&self) -> Result<Value, CatalogError> {
        let response = self
            .client
            .get(self.build_url())
            .query(&[("size", self.page_size)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CatalogError::Malformed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let payload = match timeout(self.timeout, self.fetch_payload()).await {
            Ok(result) => result?,
            Err(_) => return Err(CatalogError::Timeout(timeout_ms(self.timeout))),
        };
        let records = unwrap_listing(payload)?;
        let products = normalize_all(&records);
        info!("Fetched {} products from {}", products.len(), self.base_url);
        Ok(products)
    }
}

/// Saturates instead of truncating for absurdly long timeouts.
fn timeout_ms(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

/// Accepts a bare array or a paginated `{ "content": [...] }` envelope.
pub fn unwrap_listing(payload: Value) -> Result<Vec<Value>, CatalogError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut envelope) => match envelope.remove("content") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(CatalogError::Malformed(format!(
                "`content` is not an array: {}",
                other
            ))),
            None => Err(CatalogError::Malformed("object without `content`".into())),
        },
        other => Err(CatalogError::Malformed(format!("unexpected payload: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_and_envelope_both_unwrap() {
        let bare = unwrap_listing(json!([{"id": "1"}, {"id": "2"}])).unwrap();
        assert_eq!(bare.len(), 2);

        let paged = unwrap_listing(json!({
            "content": [{"id": "1"}],
            "totalElements": 1,
            "totalPages": 1
        }))
        .unwrap();
        assert_eq!(paged.len(), 1);
    }

    #[test]
    fn other_shapes_are_malformed() {
        assert!(matches!(unwrap_listing(json!({"items": []})), Err(CatalogError::Malformed(_))));
        assert!(matches!(unwrap_listing(json!({"content": "x"})), Err(CatalogError::Malformed(_))));
        assert!(matches!(unwrap_listing(json!("nope")), Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn timeout_millis_saturate() {
        assert_eq!(timeout_ms(Duration::from_millis(5_000)), 5_000);
        assert_eq!(timeout_ms(Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn elapsed_fetch_reports_configured_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accepts the connection but never answers.
        let _hold = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        let catalog = HttpCatalog::new(&format!("http://{}", addr), 100, Duration::from_millis(150)).unwrap();
        assert!(matches!(catalog.list_products().await, Err(CatalogError::Timeout(150))));
    }

    #[test]
    fn url_has_no_double_slash() {
        let catalog = HttpCatalog::new("http://localhost:8082/", 100, Duration::from_secs(5)).unwrap();
        assert_eq!(catalog.build_url(), "http://localhost:8082/api/products");
    }
}
