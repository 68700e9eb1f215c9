use super::*;

/// Tests that internal notes are hidden from the ticket owner.
///
/// Expected: Ok with only the public response for the owner, both for an admin
#[tokio::test]
async fn hides_internal_notes_from_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    factory::create_response(db, ticket.id, admin.id, false).await?;
    factory::create_response(db, ticket.id, admin.id, true).await?;

    let service = SupportService::new(db);
    let as_owner = service
        .get_ticket(&principal(&owner), &ticket.ticket_number)
        .await?;
    let as_admin = service
        .get_ticket(&principal(&admin), &ticket.ticket_number)
        .await?;

    assert_eq!(as_owner.responses.len(), 1);
    assert!(!as_owner.responses[0].is_internal);
    assert_eq!(as_owner.ticket.response_count, 1);
    assert_eq!(as_admin.responses.len(), 2);

    Ok(())
}

/// Tests viewing another user's ticket.
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

    let result = SupportService::new(db)
        .get_ticket(&principal(&other), &ticket.ticket_number)
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests looking up an unknown ticket number.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let result = SupportService::new(db)
        .get_ticket(&principal(&owner), "INSP-NOPE-0000")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
