use crate::AppState;
use crate::api::error::AppError;
use crate::models::{CustomExtension, ExtensionType, FixedExtension};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use super::types::*;

#[utoipa::path(
    get,
    path = "/api/extensions/fixed",
    responses(
        (status = 200, description = "Fixed extensions ordered by name", body = Vec<FixedExtension>)
    ),
    tag = "extensions"
)]
pub async fn list_fixed_extensions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FixedExtension>>>, AppError> {
    let fixed = state.extension_service.get_all_fixed_extensions().await?;
    Ok(Json(ApiResponse::ok(fixed)))
}

#[utoipa::path(
    post,
    path = "/api/extensions/fixed",
    request_body = AddFixedExtensionRequest,
    responses(
        (status = 201, description = "Fixed extension added (blocked)", body = FixedExtension),
        (status = 400, description = "Invalid, duplicate, or list full")
    ),
    tag = "extensions"
)]
pub async fn add_fixed_extension(
    State(state): State<AppState>,
    Json(req): Json<AddFixedExtensionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FixedExtension>>), AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let created = state
        .extension_service
        .add_fixed_extension(&req.extension, &req.description)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(created, "Fixed extension added")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/extensions/fixed",
    request_body = UpdateExtensionStatusRequest,
    responses(
        (status = 200, description = "Block status updated", body = FixedExtension),
        (status = 404, description = "Not a fixed extension")
    ),
    tag = "extensions"
)]
pub async fn update_fixed_extension_status(
    State(state): State<AppState>,
    Json(req): Json<UpdateExtensionStatusRequest>,
) -> Result<Json<ApiResponse<FixedExtension>>, AppError> {
    let updated = state
        .extension_service
        .update_fixed_extension_status(&req.extension, req.is_blocked)
        .await?;
    Ok(Json(ApiResponse::ok(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/extensions/fixed/{id}",
    params(
        ("id" = i32, Path, description = "Fixed extension ID")
    ),
    responses(
        (status = 200, description = "Fixed extension deleted"),
        (status = 404, description = "Fixed extension not found")
    ),
    tag = "extensions"
)]
pub async fn delete_fixed_extension(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.extension_service.delete_fixed_extension(id).await?;
    Ok(Json(ApiResponse::message("Fixed extension deleted")))
}

#[utoipa::path(
    post,
    path = "/api/extensions/fixed/reset",
    responses(
        (status = 200, description = "Fixed list restored to defaults", body = Vec<FixedExtension>)
    ),
    tag = "extensions"
)]
pub async fn reset_fixed_extensions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FixedExtension>>>, AppError> {
    let fixed = state.extension_service.reset_fixed_extensions().await?;
    Ok(Json(ApiResponse::with_message(
        fixed,
        "Fixed extensions reset to defaults",
    )))
}

#[utoipa::path(
    get,
    path = "/api/extensions/custom",
    responses(
        (status = 200, description = "Custom extensions in insertion order", body = Vec<CustomExtension>)
    ),
    tag = "extensions"
)]
pub async fn list_custom_extensions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CustomExtension>>>, AppError> {
    let custom = state.extension_service.get_all_custom_extensions().await?;
    Ok(Json(ApiResponse::ok(custom)))
}

#[utoipa::path(
    post,
    path = "/api/extensions/custom",
    request_body = AddCustomExtensionRequest,
    responses(
        (status = 201, description = "Custom extension added (blocked)", body = CustomExtension),
        (status = 400, description = "Invalid, duplicate, or list full")
    ),
    tag = "extensions"
)]
pub async fn add_custom_extension(
    State(state): State<AppState>,
    Json(req): Json<AddCustomExtensionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CustomExtension>>), AppError> {
    let created = state
        .extension_service
        .add_custom_extension(&req.extension)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(created, "Custom extension added")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/extensions/custom",
    request_body = UpdateExtensionStatusRequest,
    responses(
        (status = 200, description = "Block status updated", body = CustomExtension),
        (status = 404, description = "Not a custom extension")
    ),
    tag = "extensions"
)]
pub async fn update_custom_extension_status(
    State(state): State<AppState>,
    Json(req): Json<UpdateExtensionStatusRequest>,
) -> Result<Json<ApiResponse<CustomExtension>>, AppError> {
    let updated = state
        .extension_service
        .update_custom_extension_status(&req.extension, req.is_blocked)
        .await?;
    Ok(Json(ApiResponse::ok(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/extensions/custom",
    responses(
        (status = 200, description = "All custom extensions deleted", body = DeleteAllResponse)
    ),
    tag = "extensions"
)]
pub async fn delete_all_custom_extensions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DeleteAllResponse>>, AppError> {
    let deleted = state.extension_service.delete_all_custom_extensions().await?;
    Ok(Json(ApiResponse::ok(DeleteAllResponse { deleted })))
}

#[utoipa::path(
    delete,
    path = "/api/extensions/custom/{id}",
    params(
        ("id" = i32, Path, description = "Custom extension ID")
    ),
    responses(
        (status = 200, description = "Custom extension deleted"),
        (status = 404, description = "Custom extension not found")
    ),
    tag = "extensions"
)]
pub async fn delete_custom_extension(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.extension_service.delete_custom_extension(id).await?;
    Ok(Json(ApiResponse::message("Custom extension deleted")))
}

#[utoipa::path(
    delete,
    path = "/api/extensions/custom/extension/{extension}",
    params(
        ("extension" = String, Path, description = "Extension name")
    ),
    responses(
        (status = 200, description = "Custom extension deleted"),
        (status = 404, description = "Custom extension not found")
    ),
    tag = "extensions"
)]
pub async fn delete_custom_extension_by_name(
    State(state): State<AppState>,
    Path(extension): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .extension_service
        .delete_custom_extension_by_name(&extension)
        .await?;
    Ok(Json(ApiResponse::message("Custom extension deleted")))
}

#[utoipa::path(
    get,
    path = "/api/extensions/check/{extension}",
    params(
        ("extension" = String, Path, description = "Extension name")
    ),
    responses(
        (status = 200, description = "Whether uploads with this extension are rejected", body = ExtensionCheckResponse)
    ),
    tag = "extensions"
)]
pub async fn check_extension(
    State(state): State<AppState>,
    Path(extension): Path<String>,
) -> Result<Json<ApiResponse<ExtensionCheckResponse>>, AppError> {
    let blocked = state
        .extension_service
        .is_extension_blocked(&extension)
        .await?;
    Ok(Json(ApiResponse::ok(ExtensionCheckResponse {
        extension: extension.to_lowercase(),
        blocked,
    })))
}

#[utoipa::path(
    get,
    path = "/api/extensions/type/{extension}",
    params(
        ("extension" = String, Path, description = "Extension name")
    ),
    responses(
        (status = 200, description = "List the extension belongs to", body = ExtensionType)
    ),
    tag = "extensions"
)]
pub async fn get_extension_type(
    State(state): State<AppState>,
    Path(extension): Path<String>,
) -> Result<Json<ApiResponse<ExtensionType>>, AppError> {
    let extension_type = state
        .extension_service
        .get_extension_type(&extension)
        .await?;
    Ok(Json(ApiResponse::ok(extension_type)))
}

#[utoipa::path(
    get,
    path = "/api/extensions/blocked",
    responses(
        (status = 200, description = "Blocked extension names, fixed first", body = Vec<String>)
    ),
    tag = "extensions"
)]
pub async fn list_blocked_extensions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let blocked = state.extension_service.get_blocked_extensions().await?;
    Ok(Json(ApiResponse::ok(blocked)))
}
