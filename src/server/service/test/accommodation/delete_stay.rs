use super::*;

/// Tests deleting a stay without bookings.
///
/// Expected: Ok and the stay is gone
#[tokio::test]
async fn deletes_unbooked_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let stay = factory::create_stay(db).await?;

    AccommodationService::new(db)
        .delete_stay(&principal(&admin), stay.id)
        .await?;

    assert_eq!(Stay::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a stay that has bookings.
///
/// Expected: Err(Conflict) and both stay and booking remain
#[tokio::test]
async fn keeps_booked_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let stay = factory::create_stay(db).await?;
    factory::create_booking(db, &user, &stay).await?;

    let result = AccommodationService::new(db)
        .delete_stay(&principal(&admin), stay.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(Stay::find().count(db).await?, 1);
    assert_eq!(StayBooking::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a stay that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;

    let result = AccommodationService::new(db)
        .delete_stay(&principal(&admin), 9999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
