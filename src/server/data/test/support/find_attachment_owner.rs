use super::*;

/// Tests resolving a ticket attachment key to the ticket owner.
///
/// Expected: Some with the ticket owner's id and the file name
#[tokio::test]
async fn resolves_ticket_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, user.id).await?;
    let key = format!("support/{}/abc-screen.png", user.id);
    factory::support::create_attachment(db, ticket.id, &key).await?;

    let repo = SupportRepository::new(db);
    let owner = repo.find_attachment_owner(&key).await?.unwrap();

    assert_eq!(owner.ticket_owner_id, user.id);
    assert_eq!(owner.file_name, "abc-screen.png");
    assert!(!owner.internal);

    Ok(())
}

/// Tests resolving an attachment on an internal note.
///
/// Expected: Some with the ticket owner's id and internal set
#[tokio::test]
async fn resolves_internal_response_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, user.id).await?;
    let note = factory::create_response(db, ticket.id, admin.id, true).await?;
    let key = format!("support/{}/abc-notes.pdf", admin.id);
    factory::support::create_response_attachment(db, note.id, &key).await?;

    let repo = SupportRepository::new(db);
    let owner = repo.find_attachment_owner(&key).await?.unwrap();

    assert_eq!(owner.ticket_owner_id, user.id);
    assert!(owner.internal);

    Ok(())
}

/// Tests an unknown key.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SupportRepository::new(db);

    assert!(repo
        .find_attachment_owner("support/1/missing.png")
        .await?
        .is_none());

    Ok(())
}
