use super::*;

/// Tests the leader approving a pending join request.
///
/// Expected: Ok with status APPROVED and the requester added as a member
#[tokio::test]
async fn approves_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let requester = factory::create_user(db).await?;
    let participation = factory::create_participation(db, &requester, &event).await?;
    let request = factory::create_join_request(db, &team, &participation, "PENDING").await?;

    let answered = TeamService::new(db, MAX_TEAM_SIZE)
        .respond_to_request(&principal(&leader), request.id, true)
        .await?;

    assert_eq!(answered.status, JoinRequestStatus::Approved);
    assert!(answered.responded_at.is_some());
    assert_eq!(TeamMember::find().count(db).await?, 2);

    Ok(())
}

/// Tests the leader rejecting a pending join request.
///
/// Expected: Ok with status REJECTED and no new member
#[tokio::test]
async fn rejects_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let requester = factory::create_user(db).await?;
    let participation = factory::create_participation(db, &requester, &event).await?;
    let request = factory::create_join_request(db, &team, &participation, "PENDING").await?;

    let answered = TeamService::new(db, MAX_TEAM_SIZE)
        .respond_to_request(&principal(&leader), request.id, false)
        .await?;

    assert_eq!(answered.status, JoinRequestStatus::Rejected);
    assert_eq!(TeamMember::find().count(db).await?, 1);

    Ok(())
}

/// Tests approving a request when the team is at capacity.
///
/// Expected: Err(BadRequest) and the request stays PENDING
#[tokio::test]
async fn rejects_approval_when_team_is_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::event::EventFactory::new(db).team(2, 2).build().await?;
    let leader = factory::create_user(db).await?;
    let leader_participation = factory::create_participation(db, &leader, &event).await?;
    let team = factory::create_team(db, &event, &leader_participation).await?;
    factory::create_team_member(db, &team, &leader_participation).await?;
    let member = factory::create_user(db).await?;
    let member_participation = factory::create_participation(db, &member, &event).await?;
    factory::create_team_member(db, &team, &member_participation).await?;
    let requester = factory::create_user(db).await?;
    let participation = factory::create_participation(db, &requester, &event).await?;
    let request = factory::create_join_request(db, &team, &participation, "PENDING").await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .respond_to_request(&principal(&leader), request.id, true)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = TeamJoinRequest::find_by_id(request.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "PENDING");
    assert_eq!(TeamMember::find().count(db).await?, 2);

    Ok(())
}

/// Tests that the portal-wide maximum caps a larger event maximum.
///
/// Expected: Err(BadRequest) once the team has the portal maximum of members
#[tokio::test]
async fn applies_portal_maximum() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::event::EventFactory::new(db).team(1, 10).build().await?;
    let leader = factory::create_user(db).await?;
    let leader_participation = factory::create_participation(db, &leader, &event).await?;
    let team = factory::create_team(db, &event, &leader_participation).await?;
    factory::create_team_member(db, &team, &leader_participation).await?;
    let requester = factory::create_user(db).await?;
    let participation = factory::create_participation(db, &requester, &event).await?;
    let request = factory::create_join_request(db, &team, &participation, "PENDING").await?;

    let result = TeamService::new(db, 1)
        .respond_to_request(&principal(&leader), request.id, true)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a non-leader member answering a request.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn requires_leader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let member = factory::create_user(db).await?;
    let member_participation = factory::create_participation(db, &member, &event).await?;
    factory::create_team_member(db, &team, &member_participation).await?;
    let requester = factory::create_user(db).await?;
    let participation = factory::create_participation(db, &requester, &event).await?;
    let request = factory::create_join_request(db, &team, &participation, "PENDING").await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .respond_to_request(&principal(&member), request.id, true)
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests answering a request that was already answered.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_answered_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let requester = factory::create_user(db).await?;
    let participation = factory::create_participation(db, &requester, &event).await?;
    let request = factory::create_join_request(db, &team, &participation, "REJECTED").await?;

    let result = TeamService::new(db, MAX_TEAM_SIZE)
        .respond_to_request(&principal(&leader), request.id, true)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
