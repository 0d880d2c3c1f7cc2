use crate::api::error::AppError;
use crate::repositories::FileStore;

use super::FileService;

impl FileService {
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let record = self.get_by_id(id).await?;

        // Missing bytes must not keep the row alive
        if let Err(e) = self.storage.delete(&record.stored_filename).await {
            tracing::warn!(
                "Failed to delete bytes for file {} ({}): {}",
                id,
                record.stored_filename,
                e
            );
        }

        FileStore::delete_by_id(&self.db, id).await?;

        tracing::info!("Deleted file {} ({})", id, record.original_filename);
        Ok(())
    }
}
