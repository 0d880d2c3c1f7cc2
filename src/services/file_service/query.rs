use crate::api::error::{AppError, BusinessError};
use crate::models::FileRecord;
use crate::repositories::FileStore;

use super::FileService;

impl FileService {
    /// Newest first.
    pub async fn get_all(&self) -> Result<Vec<FileRecord>, AppError> {
        Ok(FileStore::find_all_newest_first(&self.db).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<FileRecord, AppError> {
        FileStore::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| BusinessError::NotFound(format!("File {}", id)).into())
    }

    pub async fn download(&self, id: i32) -> Result<(FileRecord, Vec<u8>), AppError> {
        let record = self.get_by_id(id).await?;

        let data = match self.storage.read(&record.stored_filename).await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::warn!("Bytes missing for file {} ({})", id, record.stored_filename);
                return Err(BusinessError::Unreadable(record.original_filename).into());
            }
            Err(e) => {
                tracing::error!("Failed to read file {} ({}): {}", id, record.stored_filename, e);
                return Err(BusinessError::Unreadable(record.original_filename).into());
            }
        };

        Ok((record, data))
    }
}
