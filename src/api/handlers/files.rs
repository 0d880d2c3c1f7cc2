use crate::AppState;
use crate::api::error::AppError;
use crate::models::FileRecord;
use crate::services::file_service::UploadRequest;
use axum::{
    Json,
    body::Body,
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::{StatusCode, header},
    response::Response,
};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::ApiResponse;

/// Multipart field carrying the file bytes.
pub const FILE_FIELD: &str = "file";

fn multipart_error(e: MultipartError) -> AppError {
    let err_msg = e.to_string();
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE || err_msg.contains("length limit exceeded") {
        AppError::PayloadTooLarge("Request body exceeds the maximum allowed limit".to_string())
    } else {
        AppError::BadRequest(err_msg)
    }
}

#[utoipa::path(
    post,
    path = "/api/files/upload",
    request_body(content = Multipart, description = "Multipart form with a `file` field"),
    responses(
        (status = 201, description = "File uploaded successfully", body = FileRecord),
        (status = 400, description = "Empty file, bad filename, or blocked extension"),
        (status = 413, description = "File too large")
    ),
    tag = "files"
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<FileRecord>>), AppError> {
    let mut request: Option<UploadRequest> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let data = field.bytes().await.map_err(multipart_error)?;

        request = Some(UploadRequest {
            filename,
            content_type,
            data,
        });
    }

    let request = request.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let record = state.file_service.upload(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(record, "File uploaded")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/files",
    responses(
        (status = 200, description = "Uploaded files, newest first", body = Vec<FileRecord>)
    ),
    tag = "files"
)]
pub async fn list_files(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FileRecord>>>, AppError> {
    let files = state.file_service.get_all().await?;
    Ok(Json(ApiResponse::ok(files)))
}

#[utoipa::path(
    get,
    path = "/api/files/{id}",
    params(
        ("id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File metadata", body = FileRecord),
        (status = 404, description = "File not found")
    ),
    tag = "files"
)]
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<FileRecord>>, AppError> {
    let file = state.file_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(file)))
}

#[utoipa::path(
    get,
    path = "/api/files/{id}/download",
    params(
        ("id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File bytes"),
        (status = 404, description = "File not found or unreadable")
    ),
    tag = "files"
)]
pub async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let (record, data) = state.file_service.download(id).await?;
    let (content_type, content_disposition) = resolve_file_headers(&record);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_DISPOSITION, content_disposition)
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(format!("Failed to build download response: {}", e)))
}

#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    params(
        ("id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File deleted"),
        (status = 404, description = "File not found")
    ),
    tag = "files"
)]
pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.file_service.delete(id).await?;
    Ok(Json(ApiResponse::message("File deleted")))
}

/// Content type and an RFC 6266 Content-Disposition for the original filename.
pub(crate) fn resolve_file_headers(record: &FileRecord) -> (String, String) {
    let content_type = record
        .content_type
        .parse::<mime::Mime>()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM);

    let ascii_filename = record
        .original_filename
        .chars()
        .filter(|c| c.is_ascii() && !c.is_control() && *c != '"' && *c != '\\' && *c != ';')
        .take(64)
        .collect::<String>();
    let fallback_filename = if ascii_filename.is_empty() {
        "file"
    } else {
        &ascii_filename
    };

    let encoded_filename =
        utf8_percent_encode(&record.original_filename, NON_ALPHANUMERIC).to_string();

    let top_level = content_type.type_();
    let disposition_type = if top_level == mime::IMAGE
        || top_level == mime::VIDEO
        || top_level == mime::AUDIO
        || top_level == mime::TEXT
        || content_type == mime::APPLICATION_PDF
    {
        "inline"
    } else {
        "attachment"
    };

    let content_disposition = format!(
        "{}; filename=\"{}\"; filename*=UTF-8''{}",
        disposition_type, fallback_filename, encoded_filename
    );

    (content_type.to_string(), content_disposition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(original_filename: &str, content_type: &str) -> FileRecord {
        let now = Utc::now();
        FileRecord {
            id: 1,
            original_filename: original_filename.to_string(),
            stored_filename: format!("uuid_{}", original_filename),
            file_size: 3,
            content_type: content_type.to_string(),
            file_path: format!("./uploads/uuid_{}", original_filename),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_resolve_file_headers_encodes_non_ascii_names() {
        let (content_type, disposition) =
            resolve_file_headers(&record("보고서.zip", "application/zip"));
        assert_eq!(content_type, "application/zip");
        assert!(disposition.starts_with("attachment; "));
        assert!(disposition.contains("filename=\".zip\""));
        assert!(disposition.contains("filename*=UTF-8''%EB%B3%B4"));
    }

    #[test]
    fn test_resolve_file_headers_inline_for_text_and_fallback_type() {
        let (_, disposition) = resolve_file_headers(&record("notes.txt", "text/plain"));
        assert!(disposition.starts_with("inline; filename=\"notes.txt\""));

        let (content_type, _) = resolve_file_headers(&record("data.bin", "not a mime"));
        assert_eq!(content_type, "application/octet-stream");
    }
}
