use super::*;

/// Tests only completed jobs older than the cutoff are deleted.
///
/// Expected: Ok(1) leaving the recent and the pending job
#[tokio::test]
async fn deletes_old_completed_jobs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OutboxJob)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let payload = serde_json::json!({});
    factory::outbox::OutboxJobFactory::new(db, "ticket_created", payload.clone())
        .status("DONE")
        .completed_at(Some(now - Duration::days(40)))
        .build()
        .await?;
    let recent = factory::outbox::OutboxJobFactory::new(db, "ticket_created", payload.clone())
        .status("DONE")
        .completed_at(Some(now - Duration::days(1)))
        .build()
        .await?;
    let pending = factory::create_outbox_job(db, "ticket_created", payload).await?;

    let repo = OutboxRepository::new(db);
    let deleted = repo.delete_done_before(now - Duration::days(30)).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(recent.id).await?.is_some());
    assert!(repo.find_by_id(pending.id).await?.is_some());

    Ok(())
}
