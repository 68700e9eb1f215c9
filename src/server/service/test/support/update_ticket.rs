use super::*;

/// Tests resolving a ticket.
///
/// Expected: Ok with status RESOLVED and resolved_at stamped
#[tokio::test]
async fn resolving_stamps_resolved_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;

    let updated = SupportService::new(db)
        .update_ticket(
            &principal(&admin),
            &ticket.ticket_number,
            Some(TicketStatus::Resolved),
            Some(TicketPriority::Low),
        )
        .await?;

    assert_eq!(updated.status, TicketStatus::Resolved);
    assert_eq!(updated.priority, TicketPriority::Low);
    assert!(updated.resolved_at.is_some());

    Ok(())
}

/// Tests an update without any field.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;

    let result = SupportService::new(db)
        .update_ticket(&principal(&admin), &ticket.ticket_number, None, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the owner changing their ticket's status.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn requires_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;

    let result = SupportService::new(db)
        .update_ticket(
            &principal(&owner),
            &ticket.ticket_number,
            Some(TicketStatus::Closed),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests moving a resolved ticket on to other statuses.
///
/// Expected: resolved_at keeps the value stamped when the ticket was resolved
#[tokio::test]
async fn later_status_changes_keep_resolved_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let service = SupportService::new(db);

    let resolved = service
        .update_ticket(
            &principal(&admin),
            &ticket.ticket_number,
            Some(TicketStatus::Resolved),
            None,
        )
        .await?;
    let resolved_at = resolved.resolved_at;
    assert!(resolved_at.is_some());

    for status in [TicketStatus::Closed, TicketStatus::InProgress, TicketStatus::Open] {
        let updated = service
            .update_ticket(
                &principal(&admin),
                &ticket.ticket_number,
                Some(status),
                None,
            )
            .await?;

        assert_eq!(updated.status, status);
        assert_eq!(updated.resolved_at, resolved_at);
    }

    let stored = SupportTicket::find_by_id(ticket.id).one(db).await?.unwrap();
    assert_eq!(stored.resolved_at, resolved_at);

    Ok(())
}
