use super::*;

/// Tests that internal notes are hidden unless requested.
///
/// Expected: 1 public response without internal, 2 with internal
#[tokio::test]
async fn hides_internal_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let ticket = factory::create_ticket(db, user.id).await?;
    factory::create_response(db, ticket.id, admin.id, false).await?;
    factory::create_response(db, ticket.id, admin.id, true).await?;

    let repo = SupportRepository::new(db);

    assert_eq!(repo.get_responses(ticket.id, false).await?.len(), 1);
    assert_eq!(repo.get_responses(ticket.id, true).await?.len(), 2);

    Ok(())
}

/// Tests response counts only include public responses.
///
/// Expected: count 1 for the first ticket, no entry for the second
#[tokio::test]
async fn counts_public_responses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let answered = factory::create_ticket(db, user.id).await?;
    let quiet = factory::create_ticket(db, user.id).await?;
    factory::create_response(db, answered.id, admin.id, false).await?;
    factory::create_response(db, answered.id, admin.id, true).await?;
    factory::create_response(db, quiet.id, admin.id, true).await?;

    let repo = SupportRepository::new(db);
    let counts = repo
        .public_response_counts(vec![answered.id, quiet.id])
        .await?;

    assert_eq!(counts.get(&answered.id), Some(&1));
    assert_eq!(counts.get(&quiet.id), None);

    Ok(())
}
