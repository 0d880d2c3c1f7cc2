use crate::config::UploadConfig;
use crate::services::{extension_service::ExtensionPolicyService, storage::StorageService};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod delete;
pub mod query;
pub mod types;
pub mod upload;

pub use types::UploadRequest;

/// Accepts uploads the extension policy allows and keeps bytes and metadata in step.
pub struct FileService {
    db: DatabaseConnection,
    storage: Arc<dyn StorageService>,
    extensions: Arc<ExtensionPolicyService>,
    config: UploadConfig,
}

impl FileService {
    pub fn new(
        db: DatabaseConnection,
        storage: Arc<dyn StorageService>,
        extensions: Arc<ExtensionPolicyService>,
        config: UploadConfig,
    ) -> Self {
        Self {
            db,
            storage,
            extensions,
            config,
        }
    }
}
