use crate::model::BuildSuggestion;
use crate::server::error::AppError;
use crate::server::AppState;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub context: String,
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderBotResponse {
    pub message: String,
    pub build_suggestion: BuildSuggestion,
}

pub async fn identity() -> Json<Value> {
    Json(json!({
        "message": "PC Budget Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": "Dynamic"
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    info!("Query: {}", req.query);
    let answer = state.assistant.answer(&req.query).await?;
    Ok(Json(QueryResponse {
        query: req.query,
        context: answer.context,
        response: answer.response,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

pub async fn budgets(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "budgets": state.knowledge.budget_ranges }))
}

pub async fn components(State(state): State<AppState>) -> Json<Value> {
    let glossary: Map<String, Value> = state
        .knowledge
        .components
        .iter()
        .map(|e| (e.keyword.clone(), Value::String(e.description.clone())))
        .collect();
    Json(json!({ "components": glossary }))
}

pub async fn tips(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "tips": state.knowledge.tips }))
}

pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let response = state.assistant.chat(&req.message, &state.chat_rng).await;
    Json(ChatResponse { response })
}

pub async fn builder_bot(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<BuilderBotResponse>, AppError> {
    info!("Builder request: {}", req.query);
    let reply = state.assistant.suggest_build(&req.query).await?;
    Ok(Json(BuilderBotResponse {
        message: reply.message,
        build_suggestion: reply.suggestion,
    }))
}
