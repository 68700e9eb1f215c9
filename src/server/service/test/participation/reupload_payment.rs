use super::*;
use chrono::{Duration, Utc};

fn reupload(participation_id: i32, user_id: i32, file: &str) -> ReuploadPaymentParams {
    ReuploadPaymentParams {
        participation_id,
        screenshot_key: format!("payments/{}/{}", user_id, file),
        transaction_id: Some("UPI-REUPLOAD".to_string()),
    }
}

/// Tests replacing the screenshot of a submitted payment.
///
/// Expected: Ok, still PAYMENT_SUBMITTED with the new key and a later submission time
#[tokio::test]
async fn resubmits_and_restamps_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    let submitted_at = Utc::now() - Duration::days(1);
    let participation = factory::participation::ParticipationFactory::new(db, &user, &event)
        .payment_submitted(200, format!("payments/{}/blurry.png", user.id))
        .payment_submitted_at(submitted_at)
        .build()
        .await?;

    let updated = ParticipationService::new(db)
        .reupload_payment(
            &principal(&user),
            reupload(participation.id, user.id, "clear.png"),
        )
        .await?;

    assert_eq!(updated.status, ParticipationStatus::PaymentSubmitted);
    assert_eq!(
        updated.payment_screenshot_key,
        Some(format!("payments/{}/clear.png", user.id))
    );
    assert_eq!(updated.transaction_id.as_deref(), Some("UPI-REUPLOAD"));
    assert!(updated.payment_submitted_at.unwrap() > submitted_at);

    Ok(())
}

/// Tests uploading a first screenshot for a registration without payment.
///
/// Expected: Ok with status PAYMENT_SUBMITTED and the event fee as amount
#[tokio::test]
async fn submits_payment_for_registered() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, event, participation) = factory::helpers::create_registered_participant(db).await?;

    ParticipationService::new(db)
        .reupload_payment(
            &principal(&user),
            reupload(participation.id, user.id, "receipt.png"),
        )
        .await?;

    let stored = Participation::find_by_id(participation.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "PAYMENT_SUBMITTED");
    assert_eq!(stored.payment_amount, Some(event.fee));
    assert!(stored.payment_submitted_at.is_some());

    Ok(())
}

/// Tests another user replacing the screenshot.
///
/// Expected: Err(AuthErr) and the stored screenshot unchanged
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    let original_key = format!("payments/{}/receipt.png", owner.id);
    let participation = factory::participation::ParticipationFactory::new(db, &owner, &event)
        .payment_submitted(200, original_key.clone())
        .build()
        .await?;

    let result = ParticipationService::new(db)
        .reupload_payment(
            &principal(&other),
            reupload(participation.id, other.id, "fake.png"),
        )
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));
    let stored = Participation::find_by_id(participation.id).one(db).await?.unwrap();
    assert_eq!(stored.payment_screenshot_key, Some(original_key));

    Ok(())
}

/// Tests replacing the screenshot once the registration is settled.
///
/// Expected: Err(BadRequest) for CONFIRMED and CANCELLED, status unchanged
#[tokio::test]
async fn rejects_settled_registrations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ParticipationService::new(db);

    for status in ["CONFIRMED", "CANCELLED"] {
        let user = factory::create_user(db).await?;
        let event = factory::create_event(db).await?;
        let participation = factory::participation::ParticipationFactory::new(db, &user, &event)
            .status(status)
            .build()
            .await?;

        let result = service
            .reupload_payment(
                &principal(&user),
                reupload(participation.id, user.id, "late.png"),
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        let stored = Participation::find_by_id(participation.id).one(db).await?.unwrap();
        assert_eq!(stored.status, status);
        assert!(stored.payment_screenshot_key.is_none());
    }

    Ok(())
}
