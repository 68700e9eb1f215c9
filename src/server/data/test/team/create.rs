use super::*;

/// Tests creating a team inserts the leader as first member.
///
/// Expected: Ok with one member who is the leader
#[tokio::test]
async fn creates_team_with_leader_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_team_event(db).await?;
    let participation = factory::create_participation(db, &user, &event).await?;

    let repo = TeamRepository::new(db);
    let team = repo.create("Rustaceans".to_string(), &participation).await?;

    let members = repo.get_members(team.id).await?;
    assert_eq!(team.leader_participation_id, participation.id);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].participation_id, participation.id);
    assert_eq!(members[0].name, participation.name);

    Ok(())
}

/// Tests that a participation cannot be a member of two teams.
///
/// Expected: Err from the unique participation_id column
#[tokio::test]
async fn rejects_second_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, leader, team) = factory::helpers::create_team_with_leader(db).await?;
    let other_leader_user = factory::create_user(db).await?;
    let other_leader = factory::create_participation(db, &other_leader_user, &event).await?;
    let other_team = factory::create_team(db, &event, &other_leader).await?;

    let repo = TeamRepository::new(db);
    let result = repo.add_member(other_team.id, &leader).await;

    assert!(result.is_err());
    assert_eq!(repo.find_membership(leader.id).await?.unwrap().team_id, team.id);

    Ok(())
}

/// Tests the pending request lookup ignores answered requests.
///
/// Expected: true only for the PENDING request
#[tokio::test]
async fn detects_pending_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, event, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let pending_user = factory::create_user(db).await?;
    let pending = factory::create_participation(db, &pending_user, &event).await?;
    let rejected_user = factory::create_user(db).await?;
    let rejected = factory::create_participation(db, &rejected_user, &event).await?;
    factory::create_join_request(db, &team, &pending, "PENDING").await?;
    factory::create_join_request(db, &team, &rejected, "REJECTED").await?;

    let repo = TeamRepository::new(db);

    assert!(repo.has_pending_request(team.id, pending.id).await?);
    assert!(!repo.has_pending_request(team.id, rejected.id).await?);
    assert_eq!(repo.get_pending_requests(team.id).await?.len(), 1);

    Ok(())
}
