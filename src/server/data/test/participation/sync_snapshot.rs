use super::*;

/// Tests rewriting the snapshot on all of a user's participations.
///
/// Expected: Ok(2) with name and phone updated, college untouched
#[tokio::test]
async fn rewrites_snapshot_for_user_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;
    factory::create_participation(db, &user, &first).await?;
    factory::create_participation(db, &user, &second).await?;
    factory::create_participation(db, &other, &first).await?;

    let repo = ParticipationRepository::new(db);
    let updated = repo
        .sync_snapshot(user.id, "Renamed", Some("9111111111"), None)
        .await?;

    assert_eq!(updated, 2);
    for (participation, _) in repo.get_by_user(user.id).await? {
        assert_eq!(participation.name, "Renamed");
        assert_eq!(participation.phone, "9111111111");
        assert_eq!(participation.college, "Test College");
    }
    let (untouched, _) = repo.get_by_user(other.id).await?.remove(0);
    assert_eq!(untouched.name, other.name);

    Ok(())
}

/// Tests that syncing the same values twice changes nothing further.
///
/// Expected: Ok with identical snapshots after both runs
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _, _) = factory::helpers::create_registered_participant(db).await?;

    let repo = ParticipationRepository::new(db);
    repo.sync_snapshot(user.id, "Same", None, Some("Same College"))
        .await?;
    let (after_first, _) = repo.get_by_user(user.id).await?.remove(0);
    repo.sync_snapshot(user.id, "Same", None, Some("Same College"))
        .await?;
    let (after_second, _) = repo.get_by_user(user.id).await?.remove(0);

    assert_eq!(after_first.name, after_second.name);
    assert_eq!(after_first.college, after_second.college);
    assert_eq!(after_second.college, "Same College");

    Ok(())
}
