use super::*;

/// Tests registering for a paid event.
///
/// Expected: Ok with status REGISTERED and no queued email
#[tokio::test]
async fn registers_for_paid_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;

    let service = ParticipationService::new(db);
    let participation = service
        .register(&principal(&user), event.id, registration(&user))
        .await?;

    assert_eq!(participation.status, ParticipationStatus::Registered);
    assert_eq!(participation.event_slug, event.slug);
    assert!(participation.payment_verified_at.is_none());
    assert_eq!(OutboxJob::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a free event is confirmed on registration.
///
/// Expected: Ok with status CONFIRMED and one confirmation job queued
#[tokio::test]
async fn confirms_free_event_immediately() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db).fee(0).build().await?;

    let service = ParticipationService::new(db);
    let participation = service
        .register(&principal(&user), event.id, registration(&user))
        .await?;

    assert_eq!(participation.status, ParticipationStatus::Confirmed);
    assert!(participation.payment_verified_at.is_some());

    let jobs = OutboxJob::find().all(db).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].kind, "registration_confirmation");

    Ok(())
}

/// Tests registering twice for the same event.
///
/// Expected: Err(Conflict) and a single registration remains
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;

    let service = ParticipationService::new(db);
    service
        .register(&principal(&user), event.id, registration(&user))
        .await?;
    let result = service
        .register(&principal(&user), event.id, registration(&user))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(Participation::find().count(db).await?, 1);

    Ok(())
}

/// Tests registering for an event with registration closed.
///
/// Expected: Err(BadRequest) and nothing written
#[tokio::test]
async fn rejects_closed_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db)
        .registration_open(false)
        .build()
        .await?;

    let result = ParticipationService::new(db)
        .register(&principal(&user), event.id, registration(&user))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Participation::find().count(db).await?, 0);

    Ok(())
}

/// Tests registering for an event that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = ParticipationService::new(db)
        .register(&principal(&user), 9999, registration(&user))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
