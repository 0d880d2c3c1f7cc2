use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Business rule violations. Each variant maps to a stable code returned to clients.
#[derive(Error, Debug)]
pub enum BusinessError {
    #[error("Invalid extension: '{0}' (letters and digits only, up to 20 characters)")]
    InvalidExtension(String),

    #[error("{list} extensions are limited to {limit} entries")]
    CapacityExceeded { list: &'static str, limit: u64 },

    #[error("Extension '{0}' already exists in the fixed list")]
    DuplicateInFixed(String),

    #[error("Extension '{0}' already exists in the custom list")]
    DuplicateInCustom(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("File is empty")]
    EmptyFile,

    #[error("File size {size} bytes exceeds the maximum of {limit} bytes ({} MB)", .limit / 1024 / 1024)]
    FileTooLarge { size: usize, limit: usize },

    #[error("Invalid filename")]
    InvalidFilename,

    #[error("Files without an extension cannot be uploaded")]
    MissingExtension,

    #[error("Blocked extension: {0}")]
    BlockedExtension(String),

    #[error("Failed to store file: {0}")]
    StorageWriteFailed(#[source] anyhow::Error),

    #[error("File not found or unreadable: {0}")]
    Unreadable(String),
}

impl BusinessError {
    pub fn code(&self) -> &'static str {
        match self {
            BusinessError::InvalidExtension(_) => "INVALID_EXTENSION",
            BusinessError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            BusinessError::DuplicateInFixed(_) => "DUPLICATE_IN_FIXED",
            BusinessError::DuplicateInCustom(_) => "DUPLICATE_IN_CUSTOM",
            BusinessError::NotFound(_) => "NOT_FOUND",
            BusinessError::EmptyFile => "EMPTY_FILE",
            BusinessError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            BusinessError::InvalidFilename => "INVALID_FILENAME",
            BusinessError::MissingExtension => "MISSING_EXTENSION",
            BusinessError::BlockedExtension(_) => "BLOCKED_EXTENSION",
            BusinessError::StorageWriteFailed(_) => "STORAGE_WRITE_FAILED",
            BusinessError::Unreadable(_) => "UNREADABLE",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            BusinessError::NotFound(_) | BusinessError::Unreadable(_) => StatusCode::NOT_FOUND,
            BusinessError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            BusinessError::StorageWriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BusinessError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Payload Too Large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Business(e) => {
                if let BusinessError::StorageWriteFailed(source) = &e {
                    tracing::error!("Storage write failed: {:?}", source);
                }
                (e.status(), e.code(), e.to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Anyhow(e) => {
                tracing::error!("Anyhow error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "code": code,
            "error": message
        }));

        (status, body).into_response()
    }
}
