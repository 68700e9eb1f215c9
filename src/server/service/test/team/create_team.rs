use super::*;

/// Tests creating a team as a registered participant.
///
/// Expected: Ok with the caller as leader and only member
#[tokio::test]
async fn creates_team_led_by_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_team_event(db).await?;
    let participation = factory::create_participation(db, &user, &event).await?;

    let team = TeamService::new(db, MAX_TEAM_SIZE)
        .create_team(&principal(&user), event.id, "Byte Busters".to_string())
        .await?;

    assert_eq!(team.name, "Byte Busters");
    assert_eq!(team.leader_participation_id, participation.id);
    assert_eq!(team.members.len(), 1);
    assert!(team.members[0].leader);

    Ok(())
}

/// Tests creating a team without registering for the event.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_team_event(db).await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .create_team(&principal(&user), event.id, "Byte Busters".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Team::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a team for an individual event.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_individual_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, event, _) = factory::helpers::create_registered_participant(db).await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .create_team(&principal(&user), event.id, "Solo".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating a second team while already on one.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_member_of_another_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader, event, _, _) = factory::helpers::create_team_with_leader(db).await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .create_team(&principal(&leader), event.id, "Second Team".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(Team::find().count(db).await?, 1);

    Ok(())
}
