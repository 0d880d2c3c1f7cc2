mod common;

use upload_guard::api::error::{AppError, BusinessError};
use upload_guard::infrastructure::seed::DEFAULT_FIXED_EXTENSIONS;
use upload_guard::models::ExtensionType;

use common::setup_extension_service;

fn business(err: AppError) -> BusinessError {
    match err {
        AppError::Business(e) => e,
        other => panic!("expected a business error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_fixed_extension_is_blocked_and_lowercased() {
    let (_db, service) = setup_extension_service().await;

    let created = service
        .add_fixed_extension("EXE", "Windows executable")
        .await
        .unwrap();

    assert_eq!(created.extension, "exe");
    assert!(created.is_blocked);
    assert_eq!(created.description, "Windows executable");
    assert!(service.is_extension_blocked("exe").await.unwrap());
    assert!(service.is_extension_blocked("Exe").await.unwrap());
}

#[tokio::test]
async fn test_add_rejects_invalid_extensions() {
    let (_db, service) = setup_extension_service().await;

    let too_long = "a".repeat(21);
    for bad in [
        "",
        "   ",
        "exe.txt",
        "exe-txt",
        "exe_txt",
        "exe@txt",
        too_long.as_str(),
    ] {
        let err = business(service.add_fixed_extension(bad, "").await.unwrap_err());
        assert!(matches!(err, BusinessError::InvalidExtension(_)), "{:?}", bad);

        let err = business(service.add_custom_extension(bad).await.unwrap_err());
        assert!(matches!(err, BusinessError::InvalidExtension(_)), "{:?}", bad);
    }

    assert!(service.get_all_fixed_extensions().await.unwrap().is_empty());
    assert!(service.get_all_custom_extensions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fixed_capacity_is_exactly_ten() {
    let (_db, service) = setup_extension_service().await;

    for i in 0..10 {
        service
            .add_fixed_extension(&format!("ext{}", i), "")
            .await
            .unwrap();
    }

    let err = business(service.add_fixed_extension("ext10", "").await.unwrap_err());
    assert!(matches!(
        err,
        BusinessError::CapacityExceeded { limit: 10, .. }
    ));
    assert_eq!(service.get_all_fixed_extensions().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_custom_capacity_is_exactly_two_hundred() {
    let (_db, service) = setup_extension_service().await;

    for i in 0..200 {
        service
            .add_custom_extension(&format!("c{}", i))
            .await
            .unwrap();
    }

    let err = business(service.add_custom_extension("c200").await.unwrap_err());
    assert!(matches!(
        err,
        BusinessError::CapacityExceeded { limit: 200, .. }
    ));
    assert_eq!(service.get_all_custom_extensions().await.unwrap().len(), 200);
}

#[tokio::test]
async fn test_validation_runs_before_capacity() {
    let (_db, service) = setup_extension_service().await;

    for i in 0..10 {
        service
            .add_fixed_extension(&format!("ext{}", i), "")
            .await
            .unwrap();
    }

    let err = business(service.add_fixed_extension("bad.ext", "").await.unwrap_err());
    assert!(matches!(err, BusinessError::InvalidExtension(_)));

    // Capacity is checked before duplicates
    let err = business(service.add_fixed_extension("ext0", "").await.unwrap_err());
    assert!(matches!(err, BusinessError::CapacityExceeded { .. }));
}

#[tokio::test]
async fn test_extension_lives_in_at_most_one_list() {
    let (_db, service) = setup_extension_service().await;

    service.add_fixed_extension("exe", "").await.unwrap();
    service.add_custom_extension("sh").await.unwrap();

    let err = business(service.add_fixed_extension("EXE", "").await.unwrap_err());
    assert!(matches!(err, BusinessError::DuplicateInFixed(ref e) if e == "exe"));

    let err = business(service.add_custom_extension("exe").await.unwrap_err());
    assert!(matches!(err, BusinessError::DuplicateInFixed(ref e) if e == "exe"));

    let err = business(service.add_custom_extension("SH").await.unwrap_err());
    assert!(matches!(err, BusinessError::DuplicateInCustom(ref e) if e == "sh"));

    let err = business(service.add_fixed_extension("sh", "").await.unwrap_err());
    assert!(matches!(err, BusinessError::DuplicateInCustom(ref e) if e == "sh"));
}

#[tokio::test]
async fn test_custom_extensions_are_always_blocked() {
    let (_db, service) = setup_extension_service().await;

    let created = service.add_custom_extension("Sh").await.unwrap();

    assert_eq!(created.extension, "sh");
    assert!(created.is_blocked);
    assert!(service.is_extension_blocked("sh").await.unwrap());
}

#[tokio::test]
async fn test_is_extension_blocked_follows_live_flag() {
    let (_db, service) = setup_extension_service().await;

    assert!(!service.is_extension_blocked("exe").await.unwrap());

    service.add_fixed_extension("exe", "").await.unwrap();
    assert!(service.is_extension_blocked("exe").await.unwrap());

    let updated = service
        .update_fixed_extension_status("EXE", false)
        .await
        .unwrap();
    assert!(!updated.is_blocked);
    assert!(updated.updated_at >= updated.created_at);
    assert!(!service.is_extension_blocked("exe").await.unwrap());

    service
        .update_fixed_extension_status("exe", true)
        .await
        .unwrap();
    assert!(service.is_extension_blocked("exe").await.unwrap());
}

#[tokio::test]
async fn test_update_unknown_extension_is_not_found() {
    let (_db, service) = setup_extension_service().await;

    let err = business(
        service
            .update_fixed_extension_status("nope", true)
            .await
            .unwrap_err(),
    );
    assert!(matches!(err, BusinessError::NotFound(_)));

    // A custom extension is not a fixed one
    service.add_custom_extension("sh").await.unwrap();
    let err = business(
        service
            .update_fixed_extension_status("sh", false)
            .await
            .unwrap_err(),
    );
    assert!(matches!(err, BusinessError::NotFound(_)));
}

#[tokio::test]
async fn test_custom_status_can_be_toggled() {
    let (_db, service) = setup_extension_service().await;

    service.add_custom_extension("sh").await.unwrap();
    let updated = service
        .update_custom_extension_status("sh", false)
        .await
        .unwrap();

    assert!(!updated.is_blocked);
    assert!(!service.is_extension_blocked("sh").await.unwrap());
    assert!(service.get_blocked_extensions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_listing_order() {
    let (_db, service) = setup_extension_service().await;

    for ext in ["scr", "bat", "exe"] {
        service.add_fixed_extension(ext, "").await.unwrap();
    }
    for ext in ["zz", "aa", "mm"] {
        service.add_custom_extension(ext).await.unwrap();
    }

    let fixed: Vec<String> = service
        .get_all_fixed_extensions()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.extension)
        .collect();
    assert_eq!(fixed, vec!["bat", "exe", "scr"]);

    let custom: Vec<String> = service
        .get_all_custom_extensions()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.extension)
        .collect();
    assert_eq!(custom, vec!["zz", "aa", "mm"]);
}

#[tokio::test]
async fn test_delete_operations() {
    let (_db, service) = setup_extension_service().await;

    let fixed = service.add_fixed_extension("exe", "").await.unwrap();
    let custom = service.add_custom_extension("sh").await.unwrap();
    service.add_custom_extension("ps1").await.unwrap();
    service.add_custom_extension("vbs").await.unwrap();

    service.delete_fixed_extension(fixed.id).await.unwrap();
    assert!(!service.is_extension_blocked("exe").await.unwrap());
    let err = business(service.delete_fixed_extension(fixed.id).await.unwrap_err());
    assert!(matches!(err, BusinessError::NotFound(_)));

    service.delete_custom_extension(custom.id).await.unwrap();
    let err = business(service.delete_custom_extension(custom.id).await.unwrap_err());
    assert!(matches!(err, BusinessError::NotFound(_)));

    service.delete_custom_extension_by_name("PS1").await.unwrap();
    let err = business(
        service
            .delete_custom_extension_by_name("ps1")
            .await
            .unwrap_err(),
    );
    assert!(matches!(err, BusinessError::NotFound(_)));

    assert_eq!(service.delete_all_custom_extensions().await.unwrap(), 1);
    assert_eq!(service.delete_all_custom_extensions().await.unwrap(), 0);

    // Freed names can be reused in the other list
    service.add_fixed_extension("sh", "").await.unwrap();
}

#[tokio::test]
async fn test_extension_type_and_blocked_names() {
    let (_db, service) = setup_extension_service().await;

    service.add_fixed_extension("exe", "").await.unwrap();
    service.add_fixed_extension("bat", "").await.unwrap();
    service
        .update_fixed_extension_status("bat", false)
        .await
        .unwrap();
    service.add_custom_extension("sh").await.unwrap();

    assert_eq!(
        service.get_extension_type("EXE").await.unwrap(),
        ExtensionType::Fixed
    );
    assert_eq!(
        service.get_extension_type("sh").await.unwrap(),
        ExtensionType::Custom
    );
    assert_eq!(
        service.get_extension_type("txt").await.unwrap(),
        ExtensionType::None
    );

    assert_eq!(
        service.get_blocked_extensions().await.unwrap(),
        vec!["exe".to_string(), "sh".to_string()]
    );
}

#[tokio::test]
async fn test_reset_restores_default_fixed_extensions() {
    let (_db, service) = setup_extension_service().await;

    service.add_fixed_extension("docm", "").await.unwrap();
    service.add_custom_extension("js").await.unwrap();

    let fixed = service.reset_fixed_extensions().await.unwrap();
    let names: Vec<&str> = fixed.iter().map(|e| e.extension.as_str()).collect();

    // "js" stays a custom extension, so the default is skipped
    let mut expected: Vec<&str> = DEFAULT_FIXED_EXTENSIONS
        .iter()
        .map(|(ext, _)| *ext)
        .filter(|ext| *ext != "js")
        .collect();
    expected.sort();
    assert_eq!(names, expected);
    assert!(fixed.iter().all(|e| !e.is_blocked));
    assert!(!names.contains(&"docm"));
    assert_eq!(
        service.get_extension_type("js").await.unwrap(),
        ExtensionType::Custom
    );
}

#[tokio::test]
async fn test_validate_extension_on_service() {
    let (_db, service) = setup_extension_service().await;

    assert!(service.validate_extension(Some("pdf")));
    assert!(!service.validate_extension(None));
    assert!(!service.validate_extension(Some("p d f")));
}
