use super::*;

fn booking(stay_id: i32, user_id: i32, guests: i32) -> BookStayParams {
    BookStayParams {
        stay_id,
        check_in: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        guests,
        phone: "9876543210".to_string(),
        screenshot_key: format!("payments/{}/stay.png", user_id),
        transaction_id: Some("UPI-998877".to_string()),
    }
}

/// Tests booking a stay for three nights and two guests.
///
/// Expected: Ok in PAYMENT_SUBMITTED with amount price x 3 x 2
#[tokio::test]
async fn computes_amount_from_nights_and_guests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let stay = factory::create_stay(db).await?;

    let booked = AccommodationService::new(db)
        .book_stay(&principal(&user), booking(stay.id, user.id, 2))
        .await?;

    assert_eq!(booked.status, ParticipationStatus::PaymentSubmitted);
    assert_eq!(booked.amount, stay.price * 3 * 2);
    assert_eq!(booked.place, stay.place);
    assert_eq!(booked.email, user.email);

    Ok(())
}

/// Tests booking a stay that does not exist.
///
/// Expected: Err(NotFound) and no booking stored
#[tokio::test]
async fn rejects_unknown_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_accommodation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = AccommodationService::new(db)
        .book_stay(&principal(&user), booking(9999, user.id, 1))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(StayBooking::find().count(db).await?, 0);

    Ok(())
}
