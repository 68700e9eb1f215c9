use super::*;

/// Tests an admin confirming a booking payment.
///
/// Expected: Ok with status CONFIRMED and an accommodation email queued
#[tokio::test]
async fn confirms_and_queues_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let stay = factory::create_stay(db).await?;
    let booking = factory::create_booking(db, &user, &stay).await?;

    let verified = AccommodationService::new(db)
        .verify_booking(&principal(&admin), booking.id)
        .await?;

    assert_eq!(verified.status, ParticipationStatus::Confirmed);
    assert!(verified.payment_verified_at.is_some());

    let jobs = OutboxJob::find().all(db).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].kind, "accommodation_confirmation");

    Ok(())
}

/// Tests confirming a booking twice.
///
/// Expected: Err(BadRequest) on the second call, one email queued
#[tokio::test]
async fn rejects_confirmed_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let stay = factory::create_stay(db).await?;
    let booking = factory::create_booking(db, &user, &stay).await?;

    let service = AccommodationService::new(db);
    service.verify_booking(&principal(&admin), booking.id).await?;
    let result = service.verify_booking(&principal(&admin), booking.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(OutboxJob::find().count(db).await?, 1);

    Ok(())
}
