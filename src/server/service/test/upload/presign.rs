use super::*;

/// Tests presigning a support attachment.
///
/// Expected: Ok with a key under the caller's support prefix and the configured expiry
#[tokio::test]
async fn presigns_support_upload_under_user_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let storage = MemoryStorage::new();

    let presigned = UploadService::new(db, &storage, TTL)
        .presign_support_upload(&principal(&user), file("error log.txt", "text/plain", 512))
        .await?;

    assert!(presigned.key.starts_with(&format!("support/{}/", user.id)));
    assert!(presigned.key.ends_with("-error_log.txt"));
    assert!(presigned.upload_url.contains(&presigned.key));
    assert_eq!(presigned.expires_in, 300);

    Ok(())
}

/// Tests presigning a file type outside the support allow-list.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_disallowed_support_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let storage = MemoryStorage::new();

    let result = UploadService::new(db, &storage, TTL)
        .presign_support_upload(
            &principal(&user),
            file("setup.exe", "application/x-msdownload", 1024),
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}

/// Tests presigning a payment screenshot.
///
/// Expected: Ok with a key under the caller's payments prefix and the image extension
#[tokio::test]
async fn presigns_payment_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let storage = MemoryStorage::new();

    let presigned = UploadService::new(db, &storage, TTL)
        .presign_payment_upload(&principal(&user), file("upi.PNG", "image/png", 4096))
        .await?;

    assert!(presigned.key.starts_with(&format!("payments/{}/", user.id)));
    assert!(presigned.key.ends_with(".png"));

    Ok(())
}

/// Tests presigning an oversized payment screenshot.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_oversized_payment_screenshot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let storage = MemoryStorage::new();

    let result = UploadService::new(db, &storage, TTL)
        .presign_payment_upload(
            &principal(&user),
            file("upi.jpg", "image/jpeg", 6 * 1024 * 1024),
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}

/// Tests a server side upload.
///
/// Expected: Ok and the object is stored under the caller's uploads prefix
#[tokio::test]
async fn stores_server_side_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let storage = MemoryStorage::new();

    let uploaded = UploadService::new(db, &storage, TTL)
        .upload(
            &principal(&admin),
            "schedule.pdf",
            "application/pdf",
            b"%PDF-1.4".to_vec(),
        )
        .await?;

    assert!(uploaded.key.starts_with(&format!("uploads/{}/", admin.id)));
    assert_eq!(uploaded.size, 8);
    assert!(storage.contains(&uploaded.key));

    Ok(())
}
