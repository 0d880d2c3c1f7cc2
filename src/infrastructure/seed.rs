use crate::models::FixedExtension;
use crate::repositories::{CustomExtensionStore, FixedExtensionStore};
use sea_orm::{ConnectionTrait, DbErr};
use tracing::{info, warn};

/// Fixed extensions installed on first start and by a reset. All start unblocked.
pub const DEFAULT_FIXED_EXTENSIONS: &[(&str, &str)] = &[
    ("bat", "Windows batch file"),
    ("cmd", "Windows command script"),
    ("com", "DOS executable"),
    ("cpl", "Windows control panel item"),
    ("exe", "Windows executable"),
    ("scr", "Windows screen saver"),
    ("js", "JavaScript source"),
];

/// Inserts the default fixed extensions, skipping any name already present in
/// either list.
pub async fn insert_default_fixed_extensions(
    db: &impl ConnectionTrait,
) -> Result<Vec<FixedExtension>, DbErr> {
    let mut inserted = Vec::with_capacity(DEFAULT_FIXED_EXTENSIONS.len());

    for (extension, description) in DEFAULT_FIXED_EXTENSIONS {
        if FixedExtensionStore::exists_by_extension(db, extension).await? {
            continue;
        }
        if CustomExtensionStore::exists_by_extension(db, extension).await? {
            warn!(
                "Default fixed extension '{}' is already a custom extension, skipping",
                extension
            );
            continue;
        }
        inserted.push(FixedExtensionStore::create(db, extension, description, false).await?);
    }

    Ok(inserted)
}

/// Seeds the default fixed extensions when the fixed list is empty.
pub async fn seed_default_extensions(db: &impl ConnectionTrait) -> anyhow::Result<()> {
    if FixedExtensionStore::count(db).await? > 0 {
        info!("🌱 Fixed extensions already present, skipping seed");
        return Ok(());
    }

    info!("🌱 Seeding default fixed extensions...");
    let inserted = insert_default_fixed_extensions(db).await?;
    info!("   - {} fixed extensions seeded", inserted.len());

    Ok(())
}
