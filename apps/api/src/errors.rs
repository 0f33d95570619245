use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::analysis::AnalysisFailure;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI analysis timed out")]
    Timeout,

    #[error("Analysis failed: {}", .0.error)]
    Analysis(AnalysisFailure),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": msg }))).into_response()
            }
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                Json(json!({ "detail": "AI analysis timed out." })),
            )
                .into_response(),
            AppError::Analysis(failure) => {
                tracing::error!("AI analysis failed: {}", failure.error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": failure })),
                )
                    .into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "detail": {
                            "error": "An unexpected error occurred during analysis.",
                            "details": e.to_string(),
                            // Full error chain, exposed on purpose for operability.
                            "trace": format!("{e:?}"),
                        }
                    })),
                )
                    .into_response()
            }
        }
    }
}
