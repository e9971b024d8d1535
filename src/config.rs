use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_CATALOG_URL: &str = "http://localhost:8082";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_url: String,
    pub catalog_page_size: u32,
    pub catalog_timeout_ms: u64,
    pub bind_addr: String,
    /// Seeds the filler-reply RNG; unset means OS entropy.
    pub chat_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_page_size: 100,
            catalog_timeout_ms: 5_000,
            bind_addr: "0.0.0.0:8089".to_string(),
            chat_seed: None,
        }
    }
}

impl AppConfig {
    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms)
    }

    /// Applies environment overrides through `lookup` so callers can pass
    /// `std::env::var` or a fixed table.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PRODUCT_CATALOGUE_SERVICE_URL") {
            self.catalog_url = url.trim_end_matches('/').to_string();
        }
        if let Some(addr) = lookup("PC_ASSISTANT_BIND") {
            self.bind_addr = addr;
        }
        if let Some(seed) = lookup("PC_ASSISTANT_CHAT_SEED") {
            match seed.trim().parse() {
                Ok(s) => self.chat_seed = Some(s),
                Err(_) => warn!("Ignoring unparseable PC_ASSISTANT_CHAT_SEED: {}", seed),
            }
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the JSON config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
