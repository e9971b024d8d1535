// HTTP surface: JSON routes over the assistant, under `/` and `/api/ai`.

pub mod error;
pub mod handlers;

pub use error::AppError;

use crate::assistant::Assistant;
use crate::knowledge::KnowledgeBase;

use axum::{
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub knowledge: Arc<KnowledgeBase>,
    pub chat_rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(assistant: Assistant, knowledge: Arc<KnowledgeBase>, chat_rng: StdRng) -> Self {
        Self {
            assistant: Arc::new(assistant),
            knowledge,
            chat_rng: Arc::new(Mutex::new(chat_rng)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::identity))
        .route("/api/ai", get(handlers::identity))
        .route("/health", get(handlers::health))
        .route("/query", post(handlers::query))
        .route("/api/ai/query", post(handlers::query))
        .route("/budgets", get(handlers::budgets))
        .route("/components", get(handlers::components))
        .route("/tips", get(handlers::tips))
        .route("/chat", post(handlers::chat))
        .route("/builder-bot", post(handlers::builder_bot))
        .route("/api/ai/builder-bot", post(handlers::builder_bot))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }
    axum::serve(listener, router(state)).await
}
