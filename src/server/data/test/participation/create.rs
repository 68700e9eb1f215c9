use super::*;

/// Tests creating a participation with the registrant snapshot.
///
/// Expected: Ok with status REGISTERED and the snapshot stored
#[tokio::test]
async fn creates_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;

    let repo = ParticipationRepository::new(db);
    let participation = repo.create(new_participation(&user, &event)).await?;

    assert_eq!(participation.status, "REGISTERED");
    assert_eq!(participation.email, user.email);
    assert_eq!(participation.phone, "9876543210");

    Ok(())
}

/// Tests that the unique (user, event) index rejects a second registration.
///
/// Expected: Err recognised as a unique violation, one row remains
#[tokio::test]
async fn rejects_duplicate_user_event_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;

    let repo = ParticipationRepository::new(db);
    repo.create(new_participation(&user, &event)).await?;
    let err = repo
        .create(new_participation(&user, &event))
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err));
    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests that the same user may register for different events.
///
/// Expected: Ok with two participations for the user
#[tokio::test]
async fn allows_same_user_on_different_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;

    let repo = ParticipationRepository::new(db);
    repo.create(new_participation(&user, &first)).await?;
    repo.create(new_participation(&user, &second)).await?;

    let rows = repo.get_by_user(user.id).await?;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|(_, event)| event.is_some()));

    Ok(())
}
