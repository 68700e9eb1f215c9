use super::*;

/// Tests a member leaving a team.
///
/// Expected: Ok and only the leader remains
#[tokio::test]
async fn member_leaves() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, leader_participation, team) =
        factory::helpers::create_team_with_leader(db).await?;
    let member = factory::create_user(db).await?;
    let member_participation = factory::create_participation(db, &member, &event).await?;
    factory::create_team_member(db, &team, &member_participation).await?;

    TeamService::new(db, MAX_TEAM_SIZE)
        .leave_team(&principal(&member), team.id)
        .await?;

    let members = TeamMember::find().all(db).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].participation_id, leader_participation.id);

    Ok(())
}

/// Tests the leader leaving while other members remain.
///
/// Expected: Err(BadRequest) and the team is unchanged
#[tokio::test]
async fn leader_cannot_leave_with_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let member = factory::create_user(db).await?;
    let member_participation = factory::create_participation(db, &member, &event).await?;
    factory::create_team_member(db, &team, &member_participation).await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .leave_team(&principal(&leader), team.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(TeamMember::find().count(db).await?, 2);

    Ok(())
}

/// Tests the only member, the leader, leaving.
///
/// Expected: Ok and the team is dissolved
#[tokio::test]
async fn lone_leader_dissolves_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader, _, _, team) = factory::helpers::create_team_with_leader(db).await?;

    TeamService::new(db, MAX_TEAM_SIZE)
        .leave_team(&principal(&leader), team.id)
        .await?;

    assert_eq!(Team::find().count(db).await?, 0);
    assert_eq!(TeamMember::find().count(db).await?, 0);

    Ok(())
}

/// Tests leaving a team the caller is not on.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let outsider = factory::create_user(db).await?;
    factory::create_participation(db, &outsider, &event).await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .leave_team(&principal(&outsider), team.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
