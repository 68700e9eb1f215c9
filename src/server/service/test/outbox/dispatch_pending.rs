use super::*;

/// Tests dispatching a confirmation for a paid registration.
///
/// Expected: One email to the registrant with a PDF invoice, job marked DONE
#[tokio::test]
async fn sends_registration_confirmation_with_invoice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    let participation = factory::participation::ParticipationFactory::new(db, &user, &event)
        .payment_submitted(200, format!("payments/{}/receipt.png", user.id))
        .status("CONFIRMED")
        .build()
        .await?;
    let job = OutboxRepository::new(db)
        .enqueue(
            &OutboxMessage::RegistrationConfirmation {
                participation_id: participation.id,
            },
            Utc::now(),
        )
        .await?;

    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();
    let summary = OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(Utc::now() + Duration::seconds(1))
        .await?;

    assert_eq!(
        summary,
        DispatchSummary {
            sent: 1,
            retried: 0,
            failed: 0
        }
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, user.email);
    assert!(sent[0].subject.contains(&event.name));
    assert_eq!(sent[0].attachments.len(), 1);
    assert_eq!(sent[0].attachments[0].content_type, "application/pdf");
    assert!(sent[0].attachments[0].bytes.starts_with(b"%PDF"));

    let stored = OutboxJob::find_by_id(job.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "DONE");
    assert_eq!(stored.attempts, 1);
    assert!(stored.completed_at.is_some());

    Ok(())
}

/// Tests dispatching a confirmation for a free event.
///
/// Expected: Email sent without an invoice
#[tokio::test]
async fn free_registration_has_no_invoice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db).fee(0).build().await?;
    let participation = factory::participation::ParticipationFactory::new(db, &user, &event)
        .status("CONFIRMED")
        .build()
        .await?;
    factory::create_outbox_job(
        db,
        "registration_confirmation",
        payload(&OutboxMessage::RegistrationConfirmation {
            participation_id: participation.id,
        }),
    )
    .await?;

    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();
    OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(Utc::now() + Duration::seconds(1))
        .await?;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].attachments.is_empty());

    Ok(())
}

/// Tests that staff response attachments are read from storage and attached.
///
/// Expected: Email to the ticket owner carrying the stored file
#[tokio::test]
async fn attaches_response_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let response = factory::create_response(db, ticket.id, admin.id, false).await?;
    let key = format!("support/{}/1-refund.pdf", admin.id);
    factory::support::create_response_attachment(db, response.id, &key).await?;
    factory::create_outbox_job(
        db,
        "ticket_response",
        payload(&OutboxMessage::TicketResponse {
            response_id: response.id,
        }),
    )
    .await?;

    let storage = MemoryStorage::new();
    storage.insert(&key, "application/pdf", b"%PDF-1.4 refund");
    let mailer = RecordingMailer::new();
    OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(Utc::now() + Duration::seconds(1))
        .await?;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, owner.email);
    assert!(sent[0].subject.contains(&ticket.ticket_number));
    assert_eq!(sent[0].attachments.len(), 1);
    assert_eq!(sent[0].attachments[0].bytes, b"%PDF-1.4 refund".to_vec());

    Ok(())
}

/// Tests a transient mailer failure.
///
/// Expected: Job back in PENDING with one attempt, a later retry time and the error
#[tokio::test]
async fn reschedules_after_send_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let job = factory::create_outbox_job(
        db,
        "ticket_created",
        payload(&OutboxMessage::TicketCreated {
            ticket_id: ticket.id,
        }),
    )
    .await?;

    let now = Utc::now() + Duration::seconds(1);
    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::failing();
    let summary = OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(now)
        .await?;

    assert_eq!(summary.retried, 1);

    let stored = OutboxJob::find_by_id(job.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "PENDING");
    assert_eq!(stored.attempts, 1);
    assert!(stored.next_attempt_at > now);
    assert!(stored.last_error.is_some());

    Ok(())
}

/// Tests the last allowed attempt failing.
///
/// Expected: Job marked FAILED with the attempt budget used up
#[tokio::test]
async fn gives_up_after_max_attempts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let job = factory::outbox::OutboxJobFactory::new(
        db,
        "ticket_created",
        payload(&OutboxMessage::TicketCreated {
            ticket_id: ticket.id,
        }),
    )
    .attempts(4)
    .build()
    .await?;

    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::failing();
    let summary = OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(Utc::now() + Duration::seconds(1))
        .await?;

    assert_eq!(summary.failed, 1);

    let stored = OutboxJob::find_by_id(job.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "FAILED");
    assert_eq!(stored.attempts, 5);

    Ok(())
}

/// Tests a job whose ticket no longer exists.
///
/// Expected: Job failed immediately without retrying
#[tokio::test]
async fn fails_job_with_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let job = factory::create_outbox_job(
        db,
        "ticket_created",
        payload(&OutboxMessage::TicketCreated { ticket_id: 9999 }),
    )
    .await?;

    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();
    let summary = OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(Utc::now() + Duration::seconds(1))
        .await?;

    assert_eq!(summary.failed, 1);
    assert!(mailer.sent().is_empty());

    let stored = OutboxJob::find_by_id(job.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "FAILED");
    assert_eq!(stored.attempts, 1);

    Ok(())
}

/// Tests that jobs scheduled for later and finished jobs are left alone.
///
/// Expected: Nothing dispatched
#[tokio::test]
async fn skips_jobs_not_due() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let message = payload(&OutboxMessage::TicketCreated {
        ticket_id: ticket.id,
    });
    factory::outbox::OutboxJobFactory::new(db, "ticket_created", message.clone())
        .next_attempt_at(Utc::now() + Duration::hours(1))
        .build()
        .await?;
    factory::outbox::OutboxJobFactory::new(db, "ticket_created", message)
        .status("DONE")
        .completed_at(Some(Utc::now()))
        .build()
        .await?;

    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();
    let summary = OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(Utc::now())
        .await?;

    assert_eq!(summary, DispatchSummary::default());
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests a job abandoned in PROCESSING by a dispatcher that stopped mid-delivery.
///
/// Expected: Sent once its lease has expired, job marked DONE
#[tokio::test]
async fn resends_job_after_lease_expires() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let now = Utc::now();
    let job = factory::outbox::OutboxJobFactory::new(
        db,
        "ticket_created",
        payload(&OutboxMessage::TicketCreated {
            ticket_id: ticket.id,
        }),
    )
    .status("PROCESSING")
    .next_attempt_at(now - Duration::minutes(1))
    .build()
    .await?;

    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();
    let summary = OutboxService::new(db, &storage, &mailer, APP_URL)
        .dispatch_pending(now)
        .await?;

    assert_eq!(summary.sent, 1);
    assert_eq!(mailer.sent()[0].to, owner.email);

    let stored = OutboxJob::find_by_id(job.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "DONE");

    Ok(())
}
