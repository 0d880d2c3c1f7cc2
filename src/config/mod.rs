use std::env;

/// Byte storage backend selected at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Plain files under `upload_dir`
    Local,
    /// S3-compatible object store (MinIO in development)
    S3,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "local" | "fs" | "filesystem" => Some(Self::Local),
            "s3" | "minio" => Some(Self::S3),
            _ => None,
        }
    }
}

/// Upload and extension policy configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Maximum file size in bytes (default: 10 MB)
    pub max_file_size: usize,

    /// Maximum number of fixed extensions (default: 10)
    pub max_fixed_extensions: u64,

    /// Maximum number of custom extensions (default: 200)
    pub max_custom_extensions: u64,

    /// Root directory for the local storage backend (default: "./uploads")
    pub upload_dir: String,

    /// Storage backend: "local" or "s3" (default: "local")
    pub storage_backend: StorageBackend,

    /// Seed the default fixed extensions when the table is empty (default: true)
    pub seed_default_extensions: bool,

    /// Allowed CORS Origins (comma separated)
    pub allowed_origins: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10 MB
            max_fixed_extensions: 10,
            max_custom_extensions: 200,
            upload_dir: "./uploads".to_string(),
            storage_backend: StorageBackend::Local,
            seed_default_extensions: true,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(), // Vite default
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl UploadConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            max_fixed_extensions: env::var("MAX_FIXED_EXTENSIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_fixed_extensions),

            max_custom_extensions: env::var("MAX_CUSTOM_EXTENSIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_custom_extensions),

            upload_dir: env::var("UPLOAD_DIR").unwrap_or(default.upload_dir),

            storage_backend: env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|v| StorageBackend::parse(&v))
                .unwrap_or(default.storage_backend),

            seed_default_extensions: env::var("SEED_DEFAULT_EXTENSIONS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(default.seed_default_extensions),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.allowed_origins),
        }
    }

    /// Create config for development (local disk, permissive CORS)
    pub fn development() -> Self {
        Self {
            upload_dir: "./uploads".to_string(),
            storage_backend: StorageBackend::Local,
            allowed_origins: vec!["*".to_string()],
            ..Self::default()
        }
    }

    /// Create config for production (object storage, explicit origins)
    pub fn production() -> Self {
        let from_env = Self::from_env();
        Self {
            storage_backend: env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|v| StorageBackend::parse(&v))
                .unwrap_or(StorageBackend::S3),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            ..from_env
        }
    }
}
