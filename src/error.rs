use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::parser::ParserError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Log parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Parser(ParserError::Spawn(_)) => {
                tracing::error!("Parser unavailable: {:?}", self);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Log parser unavailable".to_string(),
                )
            }
            AppError::Parser(ParserError::Timeout { .. }) => {
                tracing::error!("Parser timed out: {:?}", self);
                (StatusCode::GATEWAY_TIMEOUT, self.to_string())
            }
            AppError::Internal(_) => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
