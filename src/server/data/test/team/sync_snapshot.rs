use super::*;

/// Tests the profile snapshot reaches memberships and join requests.
///
/// Expected: Ok(2) with both rows carrying the new name and college
#[tokio::test]
async fn rewrites_members_and_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader_user, event, leader, _) = factory::helpers::create_team_with_leader(db).await?;
    let other_leader_user = factory::create_user(db).await?;
    let other_leader = factory::create_participation(db, &other_leader_user, &event).await?;
    let other_team = factory::create_team(db, &event, &other_leader).await?;
    factory::create_join_request(db, &other_team, &leader, "PENDING").await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .sync_snapshot(leader_user.id, "New Name", None, Some("New College"))
        .await?;

    assert_eq!(updated, 2);
    let member = repo.find_membership(leader.id).await?.unwrap();
    assert_eq!(member.name, "New Name");
    assert_eq!(member.college, "New College");
    assert_eq!(member.phone, leader.phone);
    let request = &repo.get_pending_requests(other_team.id).await?[0];
    assert_eq!(request.name, "New Name");

    Ok(())
}
