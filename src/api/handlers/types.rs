use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Envelope for every successful response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddFixedExtensionRequest {
    pub extension: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCustomExtensionRequest {
    pub extension: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExtensionStatusRequest {
    pub extension: String,
    #[serde(alias = "isBlocked", alias = "blocked")]
    pub is_blocked: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtensionCheckResponse {
    pub extension: String,
    pub blocked: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteAllResponse {
    pub deleted: u64,
}
