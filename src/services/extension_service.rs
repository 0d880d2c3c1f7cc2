use crate::api::error::{AppError, BusinessError};
use crate::config::UploadConfig;
use crate::infrastructure::seed;
use crate::models::{CustomExtension, ExtensionType, FixedExtension};
use crate::repositories::{CustomExtensionStore, FixedExtensionStore, is_unique_violation};
use crate::utils::validation::{normalize_extension, validate_extension};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use tracing::info;

/// Every custom extension is created blocked.
const CUSTOM_EXTENSION_BLOCKED_BY_DEFAULT: bool = true;

/// Newly added fixed extensions start blocked; the seeded defaults start unblocked.
const FIXED_EXTENSION_BLOCKED_ON_ADD: bool = true;

/// Owns the fixed and custom extension lists and answers whether an
/// extension may be uploaded.
pub struct ExtensionPolicyService {
    db: DatabaseConnection,
    max_fixed_extensions: u64,
    max_custom_extensions: u64,
}

impl ExtensionPolicyService {
    pub fn new(db: DatabaseConnection, config: &UploadConfig) -> Self {
        Self {
            db,
            max_fixed_extensions: config.max_fixed_extensions,
            max_custom_extensions: config.max_custom_extensions,
        }
    }

    pub fn validate_extension(&self, extension: Option<&str>) -> bool {
        validate_extension(extension)
    }

    pub async fn add_fixed_extension(
        &self,
        extension: &str,
        description: &str,
    ) -> Result<FixedExtension, AppError> {
        if !validate_extension(Some(extension)) {
            return Err(BusinessError::InvalidExtension(extension.to_string()).into());
        }
        let extension = normalize_extension(extension);

        let txn = self.db.begin().await?;

        if FixedExtensionStore::count(&txn).await? >= self.max_fixed_extensions {
            return Err(BusinessError::CapacityExceeded {
                list: "Fixed",
                limit: self.max_fixed_extensions,
            }
            .into());
        }
        if FixedExtensionStore::exists_by_extension(&txn, &extension).await? {
            return Err(BusinessError::DuplicateInFixed(extension).into());
        }
        if CustomExtensionStore::exists_by_extension(&txn, &extension).await? {
            return Err(BusinessError::DuplicateInCustom(extension).into());
        }

        let created = FixedExtensionStore::create(
            &txn,
            &extension,
            description,
            FIXED_EXTENSION_BLOCKED_ON_ADD,
        )
        .await
        .map_err(|e| duplicate_or(e, BusinessError::DuplicateInFixed(extension.clone())))?;

        txn.commit().await?;

        info!("Added fixed extension '{}'", created.extension);
        Ok(created)
    }

    pub async fn add_custom_extension(&self, extension: &str) -> Result<CustomExtension, AppError> {
        if !validate_extension(Some(extension)) {
            return Err(BusinessError::InvalidExtension(extension.to_string()).into());
        }
        let extension = normalize_extension(extension);

        let txn = self.db.begin().await?;

        if CustomExtensionStore::count(&txn).await? >= self.max_custom_extensions {
            return Err(BusinessError::CapacityExceeded {
                list: "Custom",
                limit: self.max_custom_extensions,
            }
            .into());
        }
        if CustomExtensionStore::exists_by_extension(&txn, &extension).await? {
            return Err(BusinessError::DuplicateInCustom(extension).into());
        }
        if FixedExtensionStore::exists_by_extension(&txn, &extension).await? {
            return Err(BusinessError::DuplicateInFixed(extension).into());
        }

        let created =
            CustomExtensionStore::create(&txn, &extension, CUSTOM_EXTENSION_BLOCKED_BY_DEFAULT)
                .await
                .map_err(|e| duplicate_or(e, BusinessError::DuplicateInCustom(extension.clone())))?;

        txn.commit().await?;

        info!("Added custom extension '{}'", created.extension);
        Ok(created)
    }

    /// Fixed list wins; an extension in neither list is allowed.
    pub async fn is_extension_blocked(&self, extension: &str) -> Result<bool, AppError> {
        let extension = normalize_extension(extension);

        if let Some(fixed) = FixedExtensionStore::find_by_extension(&self.db, &extension).await? {
            return Ok(fixed.is_blocked);
        }
        if let Some(custom) = CustomExtensionStore::find_by_extension(&self.db, &extension).await? {
            return Ok(custom.is_blocked);
        }
        Ok(false)
    }

    pub async fn update_fixed_extension_status(
        &self,
        extension: &str,
        blocked: bool,
    ) -> Result<FixedExtension, AppError> {
        let extension = normalize_extension(extension);
        let record = FixedExtensionStore::find_by_extension(&self.db, &extension)
            .await?
            .ok_or_else(|| BusinessError::NotFound(format!("Fixed extension '{}'", extension)))?;

        let updated = FixedExtensionStore::save(&self.db, &record.with_blocked_status(blocked)).await?;

        info!(
            "Fixed extension '{}' is now {}",
            updated.extension,
            if updated.is_blocked { "blocked" } else { "allowed" }
        );
        Ok(updated)
    }

    pub async fn update_custom_extension_status(
        &self,
        extension: &str,
        blocked: bool,
    ) -> Result<CustomExtension, AppError> {
        let extension = normalize_extension(extension);
        let record = CustomExtensionStore::find_by_extension(&self.db, &extension)
            .await?
            .ok_or_else(|| BusinessError::NotFound(format!("Custom extension '{}'", extension)))?;

        let updated =
            CustomExtensionStore::save(&self.db, &record.with_blocked_status(blocked)).await?;

        info!(
            "Custom extension '{}' is now {}",
            updated.extension,
            if updated.is_blocked { "blocked" } else { "allowed" }
        );
        Ok(updated)
    }

    pub async fn get_all_fixed_extensions(&self) -> Result<Vec<FixedExtension>, AppError> {
        Ok(FixedExtensionStore::find_all_ordered_by_extension(&self.db).await?)
    }

    pub async fn get_all_custom_extensions(&self) -> Result<Vec<CustomExtension>, AppError> {
        Ok(CustomExtensionStore::find_all_ordered_by_created_at(&self.db).await?)
    }

    pub async fn delete_fixed_extension(&self, id: i32) -> Result<(), AppError> {
        if !FixedExtensionStore::delete_by_id(&self.db, id).await? {
            return Err(BusinessError::NotFound(format!("Fixed extension {}", id)).into());
        }
        info!("Deleted fixed extension {}", id);
        Ok(())
    }

    /// Replaces the fixed list with the default set, all unblocked.
    pub async fn reset_fixed_extensions(&self) -> Result<Vec<FixedExtension>, AppError> {
        let txn = self.db.begin().await?;

        let removed = FixedExtensionStore::delete_all(&txn).await?;
        seed::insert_default_fixed_extensions(&txn).await?;
        let fixed = FixedExtensionStore::find_all_ordered_by_extension(&txn).await?;

        txn.commit().await?;

        info!(
            "Reset fixed extensions: {} removed, {} restored",
            removed,
            fixed.len()
        );
        Ok(fixed)
    }

    pub async fn delete_custom_extension(&self, id: i32) -> Result<(), AppError> {
        if !CustomExtensionStore::delete_by_id(&self.db, id).await? {
            return Err(BusinessError::NotFound(format!("Custom extension {}", id)).into());
        }
        info!("Deleted custom extension {}", id);
        Ok(())
    }

    pub async fn delete_custom_extension_by_name(&self, extension: &str) -> Result<(), AppError> {
        let extension = normalize_extension(extension);
        if !CustomExtensionStore::delete_by_extension(&self.db, &extension).await? {
            return Err(
                BusinessError::NotFound(format!("Custom extension '{}'", extension)).into(),
            );
        }
        info!("Deleted custom extension '{}'", extension);
        Ok(())
    }

    pub async fn delete_all_custom_extensions(&self) -> Result<u64, AppError> {
        let removed = CustomExtensionStore::delete_all(&self.db).await?;
        info!("Deleted all {} custom extensions", removed);
        Ok(removed)
    }

    pub async fn get_extension_type(&self, extension: &str) -> Result<ExtensionType, AppError> {
        let extension = normalize_extension(extension);

        if FixedExtensionStore::exists_by_extension(&self.db, &extension).await? {
            return Ok(ExtensionType::Fixed);
        }
        if CustomExtensionStore::exists_by_extension(&self.db, &extension).await? {
            return Ok(ExtensionType::Custom);
        }
        Ok(ExtensionType::None)
    }

    /// Blocked names from both lists, fixed first.
    pub async fn get_blocked_extensions(&self) -> Result<Vec<String>, AppError> {
        let mut blocked = FixedExtensionStore::find_blocked_extensions(&self.db).await?;
        blocked.extend(CustomExtensionStore::find_blocked_extensions(&self.db).await?);
        Ok(blocked)
    }
}

fn duplicate_or(err: DbErr, duplicate: BusinessError) -> AppError {
    if is_unique_violation(&err) {
        duplicate.into()
    } else {
        err.into()
    }
}
