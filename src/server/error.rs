use crate::model::QueryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

pub enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::BadRequest(s) => {
                tracing::warn!("Rejected request: {}", s);
                (StatusCode::BAD_REQUEST, s)
            }
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}
