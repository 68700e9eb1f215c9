use super::*;

/// Tests detaching a plain member removes only their membership and requests.
///
/// Expected: Ok with the team and leader membership intact
#[tokio::test]
async fn removes_member_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, leader, team) = factory::helpers::create_team_with_leader(db).await?;
    let user = factory::create_user(db).await?;
    let member = factory::create_participation(db, &user, &event).await?;
    factory::create_team_member(db, &team, &member).await?;
    factory::create_join_request(db, &team, &member, "APPROVED").await?;

    let repo = TeamRepository::new(db);
    repo.detach_participations(vec![member.id]).await?;

    assert!(repo.find_by_id(team.id).await?.is_some());
    assert!(repo.find_membership(member.id).await?.is_none());
    assert!(repo.find_membership(leader.id).await?.is_some());
    assert_eq!(entity::prelude::TeamJoinRequest::find().count(db).await?, 0);

    Ok(())
}

/// Tests detaching a leader deletes the whole team.
///
/// Expected: Ok with team, members and requests removed
#[tokio::test]
async fn deletes_teams_led_by_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, leader, team) = factory::helpers::create_team_with_leader(db).await?;
    let user = factory::create_user(db).await?;
    let member = factory::create_participation(db, &user, &event).await?;
    factory::create_team_member(db, &team, &member).await?;
    let applicant_user = factory::create_user(db).await?;
    let applicant = factory::create_participation(db, &applicant_user, &event).await?;
    factory::create_join_request(db, &team, &applicant, "PENDING").await?;

    let repo = TeamRepository::new(db);
    repo.detach_participations(vec![leader.id]).await?;

    assert!(repo.find_by_id(team.id).await?.is_none());
    assert_eq!(entity::prelude::TeamMember::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TeamJoinRequest::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting answered requests by status.
///
/// Expected: Ok(1) with only the REJECTED request removed
#[tokio::test]
async fn deletes_requests_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let first_user = factory::create_user(db).await?;
    let first = factory::create_participation(db, &first_user, &event).await?;
    let second_user = factory::create_user(db).await?;
    let second = factory::create_participation(db, &second_user, &event).await?;
    factory::create_join_request(db, &team, &first, "REJECTED").await?;
    factory::create_join_request(db, &team, &second, "PENDING").await?;

    let repo = TeamRepository::new(db);
    let deleted = repo
        .delete_requests_by_status(JoinRequestStatus::Rejected)
        .await?;

    assert_eq!(deleted, 1);
    assert_eq!(repo.get_pending_requests(team.id).await?.len(), 1);

    Ok(())
}
