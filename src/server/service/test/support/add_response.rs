use super::*;

/// Tests a staff reply on an open ticket.
///
/// Expected: Ok, ticket moves to IN_PROGRESS and a response email is queued
#[tokio::test]
async fn staff_reply_starts_progress_and_notifies_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;

    let response = SupportService::new(db)
        .add_response(
            &principal(&admin),
            &ticket.ticket_number,
            reply("We are checking your payment", false),
        )
        .await?;

    assert!(response.from_staff);
    assert!(!response.is_internal);

    let stored = SupportTicket::find_by_id(ticket.id).one(db).await?.unwrap();
    assert_eq!(stored.status, TicketStatus::InProgress.as_str());

    let jobs = OutboxJob::find().all(db).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].kind, "ticket_response");

    Ok(())
}

/// Tests an internal note by staff.
///
/// Expected: Ok, status unchanged and no email queued
#[tokio::test]
async fn internal_note_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;

    SupportService::new(db)
        .add_response(
            &principal(&admin),
            &ticket.ticket_number,
            reply("Checked with the bank, refund pending", true),
        )
        .await?;

    let stored = SupportTicket::find_by_id(ticket.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "OPEN");
    assert_eq!(OutboxJob::find().count(db).await?, 0);

    Ok(())
}

/// Tests the owner replying on their own ticket.
///
/// Expected: Ok and no email queued
#[tokio::test]
async fn owner_reply_sends_no_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;

    let response = SupportService::new(db)
        .add_response(
            &principal(&owner),
            &ticket.ticket_number,
            reply("Any update on this?", false),
        )
        .await?;

    assert!(!response.from_staff);
    assert_eq!(OutboxJob::find().count(db).await?, 0);

    Ok(())
}

/// Tests a non-admin posting an internal note.
///
/// Expected: Err(AuthErr) and nothing stored
#[tokio::test]
async fn rejects_internal_note_from_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;

    let result = SupportService::new(db)
        .add_response(&principal(&owner), &ticket.ticket_number, reply("secret", true))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));
    assert_eq!(SupportResponse::find().count(db).await?, 0);

    Ok(())
}

/// Tests replying on a closed ticket.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_closed_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::support::TicketFactory::new(db, owner.id)
        .status("CLOSED")
        .build()
        .await?;

    let result = SupportService::new(db)
        .add_response(&principal(&owner), &ticket.ticket_number, reply("Hello?", false))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a user replying on someone else's ticket.
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
        .add_response(&principal(&other), &ticket.ticket_number, reply("Hi", false))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}
