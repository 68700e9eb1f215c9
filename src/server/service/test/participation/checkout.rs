use super::*;

fn checkout(user: &entity::user::Model) -> CheckoutParams {
    CheckoutParams {
        snapshot: snapshot(user),
        screenshot_key: format!("payments/{}/receipt.png", user.id),
        transaction_id: Some("UPI-12345".to_string()),
    }
}

/// Tests registering with a payment in one step.
///
/// Expected: Ok with status PAYMENT_SUBMITTED and the event fee as amount
#[tokio::test]
async fn submits_payment_with_event_fee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db).fee(350).build().await?;

    let participation = ParticipationService::new(db)
        .checkout(&principal(&user), event.id, checkout(&user))
        .await?;

    assert_eq!(participation.status, ParticipationStatus::PaymentSubmitted);
    assert_eq!(participation.payment_amount, Some(350));
    assert_eq!(participation.transaction_id.as_deref(), Some("UPI-12345"));
    assert!(participation.payment_submitted_at.is_some());

    Ok(())
}

/// Tests checkout on a free event.
///
/// Expected: Err(BadRequest), free events are registered without payment
#[tokio::test]
async fn rejects_free_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db).fee(0).build().await?;

    let result = ParticipationService::new(db)
        .checkout(&principal(&user), event.id, checkout(&user))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Participation::find().count(db).await?, 0);

    Ok(())
}

/// Tests checkout after already registering.
///
/// Expected: Err(Conflict) and the existing registration is unchanged
#[tokio::test]
async fn rejects_when_already_registered() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, event, existing) = factory::helpers::create_registered_participant(db).await?;

    let result = ParticipationService::new(db)
        .checkout(&principal(&user), event.id, checkout(&user))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = Participation::find_by_id(existing.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "REGISTERED");

    Ok(())
}
