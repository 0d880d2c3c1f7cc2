use crate::entities::{fixed_extensions, prelude::*};
use crate::models::FixedExtension;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};

pub struct FixedExtensionStore;

impl FixedExtensionStore {
    pub async fn find_by_id(
        db: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<FixedExtension>, DbErr> {
        Ok(FixedExtensions::find_by_id(id)
            .one(db)
            .await?
            .map(FixedExtension::from))
    }

    /// Exact match; callers pass the lower-cased form.
    pub async fn find_by_extension(
        db: &impl ConnectionTrait,
        extension: &str,
    ) -> Result<Option<FixedExtension>, DbErr> {
        Ok(FixedExtensions::find()
            .filter(fixed_extensions::Column::Extension.eq(extension))
            .one(db)
            .await?
            .map(FixedExtension::from))
    }

    pub async fn exists_by_extension(
        db: &impl ConnectionTrait,
        extension: &str,
    ) -> Result<bool, DbErr> {
        let count = FixedExtensions::find()
            .filter(fixed_extensions::Column::Extension.eq(extension))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(db: &impl ConnectionTrait) -> Result<u64, DbErr> {
        FixedExtensions::find().count(db).await
    }

    /// All fixed extensions, ordered by extension name.
    pub async fn find_all_ordered_by_extension(
        db: &impl ConnectionTrait,
    ) -> Result<Vec<FixedExtension>, DbErr> {
        let models = FixedExtensions::find()
            .order_by_asc(fixed_extensions::Column::Extension)
            .all(db)
            .await?;
        Ok(models.into_iter().map(FixedExtension::from).collect())
    }

    pub async fn find_all_by_blocked(
        db: &impl ConnectionTrait,
        blocked: bool,
    ) -> Result<Vec<FixedExtension>, DbErr> {
        let models = FixedExtensions::find()
            .filter(fixed_extensions::Column::IsBlocked.eq(blocked))
            .order_by_asc(fixed_extensions::Column::Extension)
            .all(db)
            .await?;
        Ok(models.into_iter().map(FixedExtension::from).collect())
    }

    /// Names of the blocked fixed extensions, ordered by name.
    pub async fn find_blocked_extensions(db: &impl ConnectionTrait) -> Result<Vec<String>, DbErr> {
        FixedExtensions::find()
            .select_only()
            .column(fixed_extensions::Column::Extension)
            .filter(fixed_extensions::Column::IsBlocked.eq(true))
            .order_by_asc(fixed_extensions::Column::Extension)
            .into_tuple::<String>()
            .all(db)
            .await
    }

    pub async fn create(
        db: &impl ConnectionTrait,
        extension: &str,
        description: &str,
        is_blocked: bool,
    ) -> Result<FixedExtension, DbErr> {
        let now = Utc::now();
        let model = fixed_extensions::ActiveModel {
            extension: Set(extension.to_string()),
            is_blocked: Set(is_blocked),
            description: Set(description.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(model.insert(db).await?.into())
    }

    /// Persists the mutable columns of an existing record.
    pub async fn save(
        db: &impl ConnectionTrait,
        record: &FixedExtension,
    ) -> Result<FixedExtension, DbErr> {
        let model = fixed_extensions::ActiveModel {
            id: Unchanged(record.id),
            is_blocked: Set(record.is_blocked),
            description: Set(record.description.clone()),
            updated_at: Set(record.updated_at),
            ..Default::default()
        };
        Ok(model.update(db).await?.into())
    }

    /// Returns false when no row had this id.
    pub async fn delete_by_id(db: &impl ConnectionTrait, id: i32) -> Result<bool, DbErr> {
        let res = FixedExtensions::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn delete_all(db: &impl ConnectionTrait) -> Result<u64, DbErr> {
        let res = FixedExtensions::delete_many().exec(db).await?;
        Ok(res.rows_affected)
    }
}
