use crate::entities::{custom_extensions, prelude::*};
use crate::models::CustomExtension;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};

pub struct CustomExtensionStore;

impl CustomExtensionStore {
    pub async fn find_by_id(
        db: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<CustomExtension>, DbErr> {
        Ok(CustomExtensions::find_by_id(id)
            .one(db)
            .await?
            .map(CustomExtension::from))
    }

    pub async fn find_by_extension(
        db: &impl ConnectionTrait,
        extension: &str,
    ) -> Result<Option<CustomExtension>, DbErr> {
        Ok(CustomExtensions::find()
            .filter(custom_extensions::Column::Extension.eq(extension))
            .one(db)
            .await?
            .map(CustomExtension::from))
    }

    pub async fn exists_by_extension(
        db: &impl ConnectionTrait,
        extension: &str,
    ) -> Result<bool, DbErr> {
        let count = CustomExtensions::find()
            .filter(custom_extensions::Column::Extension.eq(extension))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(db: &impl ConnectionTrait) -> Result<u64, DbErr> {
        CustomExtensions::find().count(db).await
    }

    /// All custom extensions in insertion order (created_at, then id).
    pub async fn find_all_ordered_by_created_at(
        db: &impl ConnectionTrait,
    ) -> Result<Vec<CustomExtension>, DbErr> {
        let models = CustomExtensions::find()
            .order_by_asc(custom_extensions::Column::CreatedAt)
            .order_by_asc(custom_extensions::Column::Id)
            .all(db)
            .await?;
        Ok(models.into_iter().map(CustomExtension::from).collect())
    }

    pub async fn find_all_by_blocked(
        db: &impl ConnectionTrait,
        blocked: bool,
    ) -> Result<Vec<CustomExtension>, DbErr> {
        let models = CustomExtensions::find()
            .filter(custom_extensions::Column::IsBlocked.eq(blocked))
            .order_by_asc(custom_extensions::Column::CreatedAt)
            .order_by_asc(custom_extensions::Column::Id)
            .all(db)
            .await?;
        Ok(models.into_iter().map(CustomExtension::from).collect())
    }

    pub async fn find_blocked_extensions(db: &impl ConnectionTrait) -> Result<Vec<String>, DbErr> {
        CustomExtensions::find()
            .select_only()
            .column(custom_extensions::Column::Extension)
            .filter(custom_extensions::Column::IsBlocked.eq(true))
            .order_by_asc(custom_extensions::Column::CreatedAt)
            .order_by_asc(custom_extensions::Column::Id)
            .into_tuple::<String>()
            .all(db)
            .await
    }

    pub async fn create(
        db: &impl ConnectionTrait,
        extension: &str,
        is_blocked: bool,
    ) -> Result<CustomExtension, DbErr> {
        let model = custom_extensions::ActiveModel {
            extension: Set(extension.to_string()),
            is_blocked: Set(is_blocked),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        Ok(model.insert(db).await?.into())
    }

    pub async fn save(
        db: &impl ConnectionTrait,
        record: &CustomExtension,
    ) -> Result<CustomExtension, DbErr> {
        let model = custom_extensions::ActiveModel {
            id: Unchanged(record.id),
            is_blocked: Set(record.is_blocked),
            ..Default::default()
        };
        Ok(model.update(db).await?.into())
    }

    pub async fn delete_by_id(db: &impl ConnectionTrait, id: i32) -> Result<bool, DbErr> {
        let res = CustomExtensions::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn delete_by_extension(
        db: &impl ConnectionTrait,
        extension: &str,
    ) -> Result<bool, DbErr> {
        let res = CustomExtensions::delete_many()
            .filter(custom_extensions::Column::Extension.eq(extension))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn delete_all(db: &impl ConnectionTrait) -> Result<u64, DbErr> {
        let res = CustomExtensions::delete_many().exec(db).await?;
        Ok(res.rows_affected)
    }
}
