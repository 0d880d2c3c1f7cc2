use crate::entities::{custom_extensions, files, fixed_extensions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Administrator-curated extension with a description and a toggleable block flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FixedExtension {
    pub id: i32,
    pub extension: String,
    pub is_blocked: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FixedExtension {
    /// Returns a copy carrying the new block flag; nothing is persisted.
    pub fn with_blocked_status(&self, blocked: bool) -> Self {
        Self {
            is_blocked: blocked,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

impl From<fixed_extensions::Model> for FixedExtension {
    fn from(model: fixed_extensions::Model) -> Self {
        Self {
            id: model.id,
            extension: model.extension,
            is_blocked: model.is_blocked,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Ad-hoc extension added to the block list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomExtension {
    pub id: i32,
    pub extension: String,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl CustomExtension {
    pub fn with_blocked_status(&self, blocked: bool) -> Self {
        Self {
            is_blocked: blocked,
            ..self.clone()
        }
    }
}

impl From<custom_extensions::Model> for CustomExtension {
    fn from(model: custom_extensions::Model) -> Self {
        Self {
            id: model.id,
            extension: model.extension,
            is_blocked: model.is_blocked,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FileRecord {
    pub id: i32,
    pub original_filename: String,
    pub stored_filename: String,
    pub file_size: i64,
    pub content_type: String,
    pub file_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<files::Model> for FileRecord {
    fn from(model: files::Model) -> Self {
        Self {
            id: model.id,
            original_filename: model.original_filename,
            stored_filename: model.stored_filename,
            file_size: model.file_size,
            content_type: model.content_type,
            file_path: model.file_path,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Which list, if any, an extension belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionType {
    Fixed,
    Custom,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_blocked_status_leaves_original_untouched() {
        let now = Utc::now();
        let original = FixedExtension {
            id: 1,
            extension: "exe".to_string(),
            is_blocked: false,
            description: "Executable".to_string(),
            created_at: now,
            updated_at: now,
        };

        let blocked = original.with_blocked_status(true);

        assert!(!original.is_blocked);
        assert!(blocked.is_blocked);
        assert_eq!(blocked.extension, "exe");
        assert_eq!(blocked.created_at, original.created_at);
        assert!(blocked.updated_at >= original.updated_at);
    }

    #[test]
    fn test_extension_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExtensionType::Fixed).unwrap(),
            "\"fixed\""
        );
        assert_eq!(
            serde_json::to_string(&ExtensionType::None).unwrap(),
            "\"none\""
        );
    }
}
