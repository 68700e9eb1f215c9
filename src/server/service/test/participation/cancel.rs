use super::*;

/// Tests an admin cancelling a submitted registration.
///
/// Expected: Ok with status CANCELLED
#[tokio::test]
async fn cancels_submitted_registration() -> Result<(), AppError> {
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

    let cancelled = ParticipationService::new(db)
        .cancel(&principal(&admin), participation.id)
        .await?;

    assert_eq!(cancelled.status, ParticipationStatus::Cancelled);
    let stored = Participation::find_by_id(participation.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "CANCELLED");

    Ok(())
}

/// Tests cancelling a confirmed registration.
///
/// Expected: Ok with status CANCELLED
#[tokio::test]
async fn cancels_confirmed_registration() -> Result<(), AppError> {
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
        .status("CONFIRMED")
        .build()
        .await?;

    let cancelled = ParticipationService::new(db)
        .cancel(&principal(&admin), participation.id)
        .await?;

    assert_eq!(cancelled.status, ParticipationStatus::Cancelled);

    Ok(())
}

/// Tests cancelling a registration twice.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_already_cancelled() -> Result<(), AppError> {
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
        .status("CANCELLED")
        .build()
        .await?;

    let result = ParticipationService::new(db)
        .cancel(&principal(&admin), participation.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the registrant cancelling through the admin operation.
///
/// Expected: Err(AuthErr) and the registration untouched
#[tokio::test]
async fn requires_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _, participation) = factory::helpers::create_registered_participant(db).await?;

    let result = ParticipationService::new(db)
        .cancel(&principal(&user), participation.id)
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));
    let stored = Participation::find_by_id(participation.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "REGISTERED");

    Ok(())
}
