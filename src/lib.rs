pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

use crate::config::UploadConfig;
use crate::services::extension_service::ExtensionPolicyService;
use crate::services::file_service::FileService;
use crate::services::storage::StorageService;
use axum::{
    Router,
    http::HeaderValue,
    middleware::from_fn,
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::health::health_check,
        api::handlers::extensions::list_fixed_extensions,
        api::handlers::extensions::add_fixed_extension,
        api::handlers::extensions::update_fixed_extension_status,
        api::handlers::extensions::delete_fixed_extension,
        api::handlers::extensions::reset_fixed_extensions,
        api::handlers::extensions::list_custom_extensions,
        api::handlers::extensions::add_custom_extension,
        api::handlers::extensions::update_custom_extension_status,
        api::handlers::extensions::delete_all_custom_extensions,
        api::handlers::extensions::delete_custom_extension,
        api::handlers::extensions::delete_custom_extension_by_name,
        api::handlers::extensions::check_extension,
        api::handlers::extensions::get_extension_type,
        api::handlers::extensions::list_blocked_extensions,
        api::handlers::files::upload_file,
        api::handlers::files::list_files,
        api::handlers::files::get_file,
        api::handlers::files::download_file,
        api::handlers::files::delete_file,
    ),
    components(
        schemas(
            api::handlers::health::HealthResponse,
            api::handlers::types::AddFixedExtensionRequest,
            api::handlers::types::AddCustomExtensionRequest,
            api::handlers::types::UpdateExtensionStatusRequest,
            api::handlers::types::ExtensionCheckResponse,
            api::handlers::types::DeleteAllResponse,
            models::FixedExtension,
            models::CustomExtension,
            models::FileRecord,
            models::ExtensionType,
        )
    ),
    tags(
        (name = "system", description = "Health and diagnostics"),
        (name = "extensions", description = "Fixed and custom extension policy"),
        (name = "files", description = "File upload and management endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn StorageService>,
    pub extension_service: Arc<ExtensionPolicyService>,
    pub file_service: Arc<FileService>,
    pub config: UploadConfig,
}

impl AppState {
    /// Wires the services over one database and storage backend.
    pub fn new(db: DatabaseConnection, storage: Arc<dyn StorageService>, config: UploadConfig) -> Self {
        let extension_service = Arc::new(ExtensionPolicyService::new(db.clone(), &config));
        let file_service = Arc::new(FileService::new(
            db.clone(),
            storage.clone(),
            extension_service.clone(),
            config.clone(),
        ));

        Self {
            db,
            storage,
            extension_service,
            file_service,
            config,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    use api::handlers::{extensions, files, health};

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route(
            "/api/extensions/fixed",
            get(extensions::list_fixed_extensions)
                .post(extensions::add_fixed_extension)
                .put(extensions::update_fixed_extension_status),
        )
        .route(
            "/api/extensions/fixed/reset",
            post(extensions::reset_fixed_extensions),
        )
        .route(
            "/api/extensions/fixed/:id",
            delete(extensions::delete_fixed_extension),
        )
        .route(
            "/api/extensions/custom",
            get(extensions::list_custom_extensions)
                .post(extensions::add_custom_extension)
                .put(extensions::update_custom_extension_status)
                .delete(extensions::delete_all_custom_extensions),
        )
        .route(
            "/api/extensions/custom/:id",
            delete(extensions::delete_custom_extension),
        )
        .route(
            "/api/extensions/custom/extension/:extension",
            delete(extensions::delete_custom_extension_by_name),
        )
        .route(
            "/api/extensions/check/:extension",
            get(extensions::check_extension),
        )
        .route(
            "/api/extensions/type/:extension",
            get(extensions::get_extension_type),
        )
        .route(
            "/api/extensions/blocked",
            get(extensions::list_blocked_extensions),
        )
        .route(
            "/api/files/upload",
            post(files::upload_file).layer(axum::extract::DefaultBodyLimit::max(
                state.config.max_file_size + 10 * 1024 * 1024, // Add 10MB buffer for multipart overhead
            )),
        )
        .route("/api/files", get(files::list_files))
        .route(
            "/api/files/:id",
            get(files::get_file).delete(files::delete_file),
        )
        .route("/api/files/:id/download", get(files::download_file))
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(cors_layer(&state.config))
        .with_state(state)
}

fn cors_layer(config: &UploadConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    if config.allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}
