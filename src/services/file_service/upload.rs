use crate::api::error::{AppError, BusinessError};
use crate::models::FileRecord;
use crate::repositories::{FileStore, NewFile};
use crate::utils::validation::{
    MAX_FILENAME_LENGTH, clean_filename, extract_extension, truncate_preserving_extension,
};
use uuid::Uuid;

use super::{
    FileService,
    types::{DEFAULT_CONTENT_TYPE, UploadRequest},
};

impl FileService {
    pub async fn upload(&self, request: UploadRequest) -> Result<FileRecord, AppError> {
        let size = request.size();

        // 1. Size checks
        if size == 0 {
            return Err(BusinessError::EmptyFile.into());
        }
        if size > self.config.max_file_size {
            return Err(BusinessError::FileTooLarge {
                size,
                limit: self.config.max_file_size,
            }
            .into());
        }

        // 2. Filename and extension
        let original_filename = request
            .filename
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(BusinessError::InvalidFilename)?
            .to_string();
        // Read the extension before any truncation so long names cannot hide it
        let cleaned = clean_filename(&original_filename).ok_or(BusinessError::InvalidFilename)?;
        let extension = extract_extension(&cleaned).ok_or(BusinessError::MissingExtension)?;

        // 3. Policy
        if self.extensions.is_extension_blocked(&extension).await? {
            tracing::warn!(
                "Rejected upload of '{}': extension '{}' is blocked",
                original_filename,
                extension
            );
            return Err(BusinessError::BlockedExtension(extension).into());
        }

        // 4. Stored name, unique by construction
        let stored_filename = self.generate_stored_filename(&cleaned).await?;

        // 5. Bytes first, then metadata
        self.storage
            .write(&stored_filename, request.data)
            .await
            .map_err(BusinessError::StorageWriteFailed)?;

        let new_file = NewFile {
            original_filename,
            stored_filename: stored_filename.clone(),
            file_size: size as i64,
            content_type: request
                .content_type
                .filter(|ct| !ct.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            file_path: self.storage.resolve(&stored_filename),
        };

        let record = match FileStore::create(&self.db, new_file).await {
            Ok(record) => record,
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&stored_filename).await {
                    tracing::error!(
                        "Failed to remove orphaned file {} after insert failure: {}",
                        stored_filename,
                        cleanup
                    );
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            "Uploaded '{}' as {} ({} bytes)",
            record.original_filename,
            record.stored_filename,
            record.file_size
        );
        Ok(record)
    }

    async fn generate_stored_filename(&self, cleaned: &str) -> Result<String, AppError> {
        loop {
            let prefix = Uuid::new_v4().to_string();
            let max_name = MAX_FILENAME_LENGTH - prefix.len() - 1;
            let candidate = format!(
                "{}_{}",
                prefix,
                truncate_preserving_extension(cleaned, max_name)
            );

            if !FileStore::exists_by_stored_filename(&self.db, &candidate).await? {
                return Ok(candidate);
            }
            tracing::warn!("Stored filename collision on {}, regenerating", candidate);
        }
    }
}
