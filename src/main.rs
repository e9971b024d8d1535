use pc_budget_assistant::assistant::Assistant;
use pc_budget_assistant::catalog::{CatalogAdapter, HttpCatalog};
use pc_budget_assistant::config::{load_config, AppConfig};
use pc_budget_assistant::knowledge::KnowledgeBase;
use pc_budget_assistant::server::{self, AppState};

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config_path = std::env::var("PC_ASSISTANT_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg.with_env_overrides(|key| std::env::var(key).ok()),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };
    info!("Catalog service: {}", config.catalog_url);

    let catalog = match HttpCatalog::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create catalog client: {}", e);
            return;
        }
    };

    let knowledge = Arc::new(KnowledgeBase::builtin());
    let assistant = Assistant::new(CatalogAdapter::new(Arc::new(catalog)), knowledge.clone());
    let chat_rng = match config.chat_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let state = AppState::new(assistant, knowledge, chat_rng);

    let listener = match TcpListener::bind(&config.bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            return;
        }
    };

    if let Err(e) = server::serve(listener, state).await {
        error!("Server error: {}", e);
    }
}
