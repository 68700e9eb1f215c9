use super::*;

/// Tests filtering participations by status.
///
/// Expected: Ok with only the PAYMENT_SUBMITTED row and total 1
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_event(db).await?;
    let paid = factory::create_user(db).await?;
    let unpaid = factory::create_user(db).await?;
    factory::participation::ParticipationFactory::new(db, &paid, &event)
        .payment_submitted(200, format!("payments/{}/a.png", paid.id))
        .build()
        .await?;
    factory::create_participation(db, &unpaid, &event).await?;

    let repo = ParticipationRepository::new(db);
    let (rows, total) = repo
        .get_paginated(
            &ParticipationFilter {
                event_id: None,
                status: Some(ParticipationStatus::PaymentSubmitted),
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.user_id, paid.id);

    Ok(())
}

/// Tests that pagination reports the total across pages.
///
/// Expected: Ok with 2 rows on the first page and total 3
#[tokio::test]
async fn paginates_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_event(db).await?;
    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        factory::create_participation(db, &user, &event).await?;
    }

    let repo = ParticipationRepository::new(db);
    let filter = ParticipationFilter {
        event_id: Some(event.id),
        status: None,
    };
    let (first, total) = repo.get_paginated(&filter, 0, 2).await?;
    let (second, _) = repo.get_paginated(&filter, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}
