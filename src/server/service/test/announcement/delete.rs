use super::*;

/// Tests an admin deleting an announcement with an attachment.
///
/// Expected: Ok, the row is gone and the attachment object removed
#[tokio::test]
async fn deletes_as_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let admin = factory::create_admin(db).await?;
    storage.insert("uploads/1/schedule.pdf", "application/pdf", b"%PDF");
    storage.insert("uploads/1/other.pdf", "application/pdf", b"%PDF");
    let announcement =
        factory::create_announcement(db, "Schedule", Some("uploads/1/schedule.pdf")).await?;

    AnnouncementService::new(db, &storage)
        .delete(&principal(&admin), announcement.id)
        .await?;

    assert_eq!(Announcement::find().count(db).await?, 0);
    assert!(!storage.contains("uploads/1/schedule.pdf"));
    assert!(storage.contains("uploads/1/other.pdf"));

    Ok(())
}

/// Tests a participant trying to delete an announcement.
///
/// Expected: Err(AuthErr) and the row remains
#[tokio::test]
async fn rejects_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let user = factory::create_user(db).await?;
    let announcement = factory::create_announcement(db, "Schedule", None).await?;

    let result = AnnouncementService::new(db, &storage)
        .delete(&principal(&user), announcement.id)
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));
    assert_eq!(Announcement::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an announcement that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_announcement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let admin = factory::create_admin(db).await?;

    let result = AnnouncementService::new(db, &storage)
        .delete(&principal(&admin), 9999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
