use super::*;

/// Tests an admin verifying a submitted payment.
///
/// Expected: Ok with status CONFIRMED and a confirmation job queued
#[tokio::test]
async fn confirms_and_queues_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    let participation = factory::participation::ParticipationFactory::new(db, &user, &event)
        .payment_submitted(200, format!("payments/{}/receipt.png", user.id))
        .build()
        .await?;

    let verified = ParticipationService::new(db)
        .verify_payment(&principal(&admin), participation.id)
        .await?;

    assert_eq!(verified.status, ParticipationStatus::Confirmed);
    assert!(verified.payment_verified_at.is_some());

    let jobs = OutboxJob::find().all(db).await?;
    assert_eq!(jobs.len(), 1);
    assert!(jobs[0]
        .payload
        .contains(&format!("\"participation_id\":{}", participation.id)));

    Ok(())
}

/// Tests a non-admin verifying a payment.
///
/// Expected: Err(AuthErr) and the registration stays PAYMENT_SUBMITTED
#[tokio::test]
async fn requires_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    let participation = factory::participation::ParticipationFactory::new(db, &user, &event)
        .payment_submitted(200, format!("payments/{}/receipt.png", user.id))
        .build()
        .await?;

    let result = ParticipationService::new(db)
        .verify_payment(&principal(&user), participation.id)
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));
    let stored = Participation::find_by_id(participation.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "PAYMENT_SUBMITTED");
    assert_eq!(OutboxJob::find().count(db).await?, 0);

    Ok(())
}

/// Tests verifying a registration that has no payment yet.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_registration_without_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let (_, _, participation) = factory::helpers::create_registered_participant(db).await?;

    let result = ParticipationService::new(db)
        .verify_payment(&principal(&admin), participation.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
