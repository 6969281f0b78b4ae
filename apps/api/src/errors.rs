use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::models::{SearchError, SearchErrorKind};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Search(#[from] SearchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Search(e) => {
                tracing::error!("Job search failed: {e}");
                let code = match e.kind() {
                    SearchErrorKind::CredentialsMissing => "CREDENTIALS_MISSING",
                    SearchErrorKind::VendorHttpError => "VENDOR_HTTP_ERROR",
                    SearchErrorKind::VendorTransportError => "VENDOR_TRANSPORT_ERROR",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, code, e.to_string())
            }
        };

        let body = Json(json!({
            "detail": detail,
            "code": code,
        }));

        (status, body).into_response()
    }
}
