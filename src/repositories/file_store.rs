use crate::entities::{files, prelude::*};
use crate::models::FileRecord;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

/// Column values for a freshly stored upload.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub original_filename: String,
    pub stored_filename: String,
    pub file_size: i64,
    pub content_type: String,
    pub file_path: String,
}

pub struct FileStore;

impl FileStore {
    pub async fn find_by_id(db: &impl ConnectionTrait, id: i32) -> Result<Option<FileRecord>, DbErr> {
        Ok(Files::find_by_id(id).one(db).await?.map(FileRecord::from))
    }

    pub async fn exists_by_stored_filename(
        db: &impl ConnectionTrait,
        stored_filename: &str,
    ) -> Result<bool, DbErr> {
        let count = Files::find()
            .filter(files::Column::StoredFilename.eq(stored_filename))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Newest first; rows sharing a timestamp keep reverse insertion order.
    pub async fn find_all_newest_first(db: &impl ConnectionTrait) -> Result<Vec<FileRecord>, DbErr> {
        let models = Files::find()
            .order_by_desc(files::Column::CreatedAt)
            .order_by_desc(files::Column::Id)
            .all(db)
            .await?;
        Ok(models.into_iter().map(FileRecord::from).collect())
    }

    pub async fn create(db: &impl ConnectionTrait, new_file: NewFile) -> Result<FileRecord, DbErr> {
        let now = Utc::now();
        let model = files::ActiveModel {
            original_filename: Set(new_file.original_filename),
            stored_filename: Set(new_file.stored_filename),
            file_size: Set(new_file.file_size),
            content_type: Set(new_file.content_type),
            file_path: Set(new_file.file_path),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(model.insert(db).await?.into())
    }

    pub async fn delete_by_id(db: &impl ConnectionTrait, id: i32) -> Result<bool, DbErr> {
        let res = Files::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
