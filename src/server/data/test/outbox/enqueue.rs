use super::*;

/// Tests enqueueing stores the kind and the tagged payload.
///
/// Expected: Ok with a PENDING job due now and a payload that parses back
#[tokio::test]
async fn stores_pending_job() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OutboxJob)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let repo = OutboxRepository::new(db);
    let message = OutboxMessage::TicketCreated { ticket_id: 4 };
    let job = repo.enqueue(&message, now).await?;

    assert_eq!(job.kind, "ticket_created");
    assert_eq!(job.status, "PENDING");
    assert_eq!(job.attempts, 0);
    assert_eq!(job.max_attempts, MAX_ATTEMPTS);
    assert_eq!(
        serde_json::from_str::<OutboxMessage>(&job.payload).unwrap(),
        message
    );
    assert_eq!(repo.get_due(now, 10).await?.len(), 1);

    Ok(())
}

/// Tests jobs scheduled in the future are not due.
///
/// Expected: only the job whose next attempt has passed is returned
#[tokio::test]
async fn returns_only_due_jobs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OutboxJob)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let due = factory::outbox::OutboxJobFactory::new(db, "ticket_created", serde_json::json!({}))
        .next_attempt_at(now - Duration::seconds(1))
        .build()
        .await?;
    factory::outbox::OutboxJobFactory::new(db, "ticket_created", serde_json::json!({}))
        .next_attempt_at(now + Duration::minutes(5))
        .build()
        .await?;
    factory::outbox::OutboxJobFactory::new(db, "ticket_created", serde_json::json!({}))
        .status("DONE")
        .next_attempt_at(now - Duration::minutes(5))
        .build()
        .await?;

    let repo = OutboxRepository::new(db);
    let jobs = repo.get_due(now, 10).await?;

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, due.id);

    Ok(())
}
