mod common;

use upload_guard::infrastructure::seed;
use upload_guard::repositories::{
    CustomExtensionStore, FileStore, FixedExtensionStore, NewFile, is_unique_violation,
};

use common::setup_test_db;

#[tokio::test]
async fn test_fixed_store_queries() {
    let db = setup_test_db().await;

    let exe = FixedExtensionStore::create(&db, "exe", "Executable", true)
        .await
        .unwrap();
    FixedExtensionStore::create(&db, "bat", "Batch", false)
        .await
        .unwrap();

    assert_eq!(FixedExtensionStore::count(&db).await.unwrap(), 2);
    assert_eq!(
        FixedExtensionStore::find_by_id(&db, exe.id).await.unwrap(),
        Some(exe.clone())
    );
    assert!(
        FixedExtensionStore::find_by_extension(&db, "EXE")
            .await
            .unwrap()
            .is_none()
    );

    let allowed = FixedExtensionStore::find_all_by_blocked(&db, false)
        .await
        .unwrap();
    assert_eq!(allowed.len(), 1);
    assert_eq!(allowed[0].extension, "bat");

    assert_eq!(
        FixedExtensionStore::find_blocked_extensions(&db).await.unwrap(),
        vec!["exe".to_string()]
    );

    let saved = FixedExtensionStore::save(&db, &exe.with_blocked_status(false))
        .await
        .unwrap();
    assert!(!saved.is_blocked);
    assert_eq!(saved.description, "Executable");
    assert_eq!(saved.created_at, exe.created_at);
    assert!(
        FixedExtensionStore::find_blocked_extensions(&db)
            .await
            .unwrap()
            .is_empty()
    );

    assert_eq!(FixedExtensionStore::delete_all(&db).await.unwrap(), 2);
}

#[tokio::test]
async fn test_unique_extension_index() {
    let db = setup_test_db().await;

    CustomExtensionStore::create(&db, "sh", true).await.unwrap();
    let err = CustomExtensionStore::create(&db, "sh", true)
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err));
}

#[tokio::test]
async fn test_custom_store_queries() {
    let db = setup_test_db().await;

    let sh = CustomExtensionStore::create(&db, "sh", true).await.unwrap();
    let ps1 = CustomExtensionStore::create(&db, "ps1", true).await.unwrap();

    let unblocked = CustomExtensionStore::save(&db, &ps1.with_blocked_status(false))
        .await
        .unwrap();
    assert!(!unblocked.is_blocked);

    assert_eq!(
        CustomExtensionStore::find_by_id(&db, sh.id).await.unwrap(),
        Some(sh)
    );
    assert_eq!(
        CustomExtensionStore::find_all_by_blocked(&db, false)
            .await
            .unwrap(),
        vec![unblocked]
    );
    assert_eq!(
        CustomExtensionStore::find_blocked_extensions(&db).await.unwrap(),
        vec!["sh".to_string()]
    );
    assert!(
        CustomExtensionStore::delete_by_extension(&db, "sh")
            .await
            .unwrap()
    );
    assert!(
        !CustomExtensionStore::delete_by_extension(&db, "sh")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_file_store_rows() {
    let db = setup_test_db().await;

    let record = FileStore::create(
        &db,
        NewFile {
            original_filename: "test.txt".to_string(),
            stored_filename: "abc_test.txt".to_string(),
            file_size: 5,
            content_type: "text/plain".to_string(),
            file_path: "./uploads/abc_test.txt".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(
        FileStore::exists_by_stored_filename(&db, "abc_test.txt")
            .await
            .unwrap()
    );
    assert!(FileStore::delete_by_id(&db, record.id).await.unwrap());
    assert!(!FileStore::delete_by_id(&db, record.id).await.unwrap());
    assert!(FileStore::find_by_id(&db, record.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_seed_only_fills_empty_table() {
    let db = setup_test_db().await;

    seed::seed_default_extensions(&db).await.unwrap();
    let seeded = FixedExtensionStore::count(&db).await.unwrap();
    assert_eq!(seeded, seed::DEFAULT_FIXED_EXTENSIONS.len() as u64);
    assert!(
        FixedExtensionStore::find_blocked_extensions(&db)
            .await
            .unwrap()
            .is_empty()
    );

    FixedExtensionStore::delete_all(&db).await.unwrap();
    FixedExtensionStore::create(&db, "docm", "", true)
        .await
        .unwrap();
    seed::seed_default_extensions(&db).await.unwrap();
    assert_eq!(FixedExtensionStore::count(&db).await.unwrap(), 1);
}
