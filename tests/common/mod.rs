#![allow(dead_code)]

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use sea_orm::{Database, DatabaseConnection};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use upload_guard::AppState;
use upload_guard::config::UploadConfig;
use upload_guard::infrastructure::database;
use upload_guard::services::extension_service::ExtensionPolicyService;
use upload_guard::services::file_service::FileService;
use upload_guard::services::storage::StorageService;

pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    database::run_migrations(&db).await.unwrap();
    db
}

/// In-memory byte store.
pub struct MockStorageService {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.files.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn remove(&self, key: &str) {
        self.files.lock().unwrap().remove(key);
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn write(&self, key: &str, data: Bytes) -> anyhow::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }

    async fn read(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.files.lock().unwrap().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.files.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(key))
    }

    fn resolve(&self, key: &str) -> String {
        format!("mock://{}", key)
    }
}

/// Storage whose writes always fail.
pub struct FailingStorageService;

#[async_trait]
impl StorageService for FailingStorageService {
    async fn write(&self, _key: &str, _data: Bytes) -> anyhow::Result<()> {
        Err(anyhow!("disk full"))
    }

    async fn read(&self, _key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn delete(&self, _key: &str) -> anyhow::Result<()> {
        Ok(())
    }

    async fn exists(&self, _key: &str) -> anyhow::Result<bool> {
        Ok(false)
    }

    fn resolve(&self, key: &str) -> String {
        format!("failing://{}", key)
    }
}

pub fn test_config() -> UploadConfig {
    UploadConfig::development()
}

pub async fn setup_extension_service() -> (DatabaseConnection, ExtensionPolicyService) {
    let db = setup_test_db().await;
    let service = ExtensionPolicyService::new(db.clone(), &test_config());
    (db, service)
}

pub struct FileTestContext {
    pub db: DatabaseConnection,
    pub storage: Arc<MockStorageService>,
    pub extensions: Arc<ExtensionPolicyService>,
    pub files: FileService,
}

pub async fn setup_file_service() -> FileTestContext {
    let db = setup_test_db().await;
    let config = test_config();
    let storage = Arc::new(MockStorageService::new());
    let extensions = Arc::new(ExtensionPolicyService::new(db.clone(), &config));
    let files = FileService::new(db.clone(), storage.clone(), extensions.clone(), config);

    FileTestContext {
        db,
        storage,
        extensions,
        files,
    }
}

pub async fn setup_app_state() -> (AppState, Arc<MockStorageService>) {
    let db = setup_test_db().await;
    let storage = Arc::new(MockStorageService::new());
    let state = AppState::new(db, storage.clone(), test_config());
    (state, storage)
}
