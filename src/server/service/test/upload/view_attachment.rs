use super::*;

/// Tests the ticket owner viewing a ticket attachment.
///
/// Expected: Ok with a signed URL and image display mode
#[tokio::test]
async fn owner_views_ticket_attachment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let key = format!("support/{}/1-screen.png", owner.id);
    factory::support::create_attachment(db, ticket.id, &key).await?;
    let storage = MemoryStorage::new();

    let view = UploadService::new(db, &storage, TTL)
        .view_attachment(&principal(&owner), &key)
        .await?;

    assert!(view.url.contains(&key));
    assert_eq!(view.display_mode, DisplayMode::Image);
    assert_eq!(view.expires_in, 300);

    Ok(())
}

/// Tests another participant viewing a ticket attachment.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn rejects_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let key = format!("support/{}/1-screen.png", owner.id);
    factory::support::create_attachment(db, ticket.id, &key).await?;
    let storage = MemoryStorage::new();

    let result = UploadService::new(db, &storage, TTL)
        .view_attachment(&principal(&other), &key)
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests that attachments on internal notes are for staff only.
///
/// Expected: Err(AuthErr) for the ticket owner, Ok for an admin
#[tokio::test]
async fn internal_attachment_is_staff_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let note = factory::create_response(db, ticket.id, admin.id, true).await?;
    let key = format!("support/{}/1-bank-statement.pdf", admin.id);
    factory::support::create_response_attachment(db, note.id, &key).await?;
    let storage = MemoryStorage::new();
    let service = UploadService::new(db, &storage, TTL);

    let as_owner = service.view_attachment(&principal(&owner), &key).await;
    let as_admin = service.view_attachment(&principal(&admin), &key).await?;

    assert!(matches!(as_owner, Err(AppError::AuthErr(_))));
    assert_eq!(as_admin.display_mode, DisplayMode::Pdf);

    Ok(())
}

/// Tests that payment screenshots are visible to their uploader and admins only.
///
/// Expected: Ok for the uploader and an admin, Err(AuthErr) for anyone else
#[tokio::test]
async fn payment_screenshot_visibility() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let uploader = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let key = format!("payments/{}/abc.jpg", uploader.id);
    let storage = MemoryStorage::new();
    let service = UploadService::new(db, &storage, TTL);

    assert!(service.view_attachment(&principal(&uploader), &key).await.is_ok());
    assert!(service.view_attachment(&principal(&admin), &key).await.is_ok());
    assert!(matches!(
        service.view_attachment(&principal(&other), &key).await,
        Err(AppError::AuthErr(_))
    ));

    Ok(())
}

/// Tests viewing a key no attachment row refers to.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let storage = MemoryStorage::new();

    let result = UploadService::new(db, &storage, TTL)
        .view_attachment(&principal(&admin), "support/1/missing.png")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
