use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::ner::NerError;

/// User-facing text for every failure that happens after an upload was accepted.
pub const GENERIC_PROCESSING_MESSAGE: &str = "Error processing the file";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The upload layer rejected the request before any parsing happened.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds the configured size limit")]
    PayloadTooLarge,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failure: {0}")]
    ExtractionFailure(String),

    #[error("Document produced no usable record")]
    EmptyResult,

    #[error("NER error: {0}")]
    Ner(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedFormat(tag) => AppError::UnsupportedFormat(tag),
            other => AppError::ExtractionFailure(other.to_string()),
        }
    }
}

impl From<NerError> for AppError {
    fn from(e: NerError) -> Self {
        AppError::Ner(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                "File is too large".to_string(),
            ),
            AppError::UnsupportedFormat(tag) => {
                tracing::warn!(file_type = %tag, "Unsupported file type");
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_FORMAT",
                    GENERIC_PROCESSING_MESSAGE.to_string(),
                )
            }
            AppError::ExtractionFailure(msg) => {
                tracing::error!("Extraction failure: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILURE",
                    GENERIC_PROCESSING_MESSAGE.to_string(),
                )
            }
            AppError::EmptyResult => {
                tracing::warn!("Document produced no usable record");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EMPTY_RESULT",
                    GENERIC_PROCESSING_MESSAGE.to_string(),
                )
            }
            AppError::Ner(msg) => {
                tracing::error!("NER error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROCESSING_ERROR",
                    GENERIC_PROCESSING_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    GENERIC_PROCESSING_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
