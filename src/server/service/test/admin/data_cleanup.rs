use super::*;

/// Tests a full cleanup run.
///
/// Expected: Cancelled registrations, rejected requests and old finished jobs are
/// deleted; active registrations, pending requests and recent jobs remain
#[tokio::test]
async fn deletes_stale_rows_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let (_, event, _, team) = factory::helpers::create_team_with_leader(db).await?;

    let cancelled_user = factory::create_user(db).await?;
    factory::participation::ParticipationFactory::new(db, &cancelled_user, &event)
        .status("CANCELLED")
        .build()
        .await?;

    let rejected_user = factory::create_user(db).await?;
    let rejected = factory::create_participation(db, &rejected_user, &event).await?;
    factory::create_join_request(db, &team, &rejected, "REJECTED").await?;
    let pending_user = factory::create_user(db).await?;
    let pending = factory::create_participation(db, &pending_user, &event).await?;
    factory::create_join_request(db, &team, &pending, "PENDING").await?;

    let now = Utc::now();
    let payload = serde_json::json!({ "type": "ticket_created", "ticket_id": 1 });
    factory::outbox::OutboxJobFactory::new(db, "ticket_created", payload.clone())
        .status("DONE")
        .completed_at(Some(now - Duration::days(40)))
        .build()
        .await?;
    factory::outbox::OutboxJobFactory::new(db, "ticket_created", payload)
        .status("DONE")
        .completed_at(Some(now - Duration::days(2)))
        .build()
        .await?;

    let result = AdminService::new(db)
        .data_cleanup(
            &principal(&admin),
            DataCleanupParams {
                cancelled_participations: true,
                rejected_join_requests: true,
                completed_jobs_before: Some(now - Duration::days(30)),
            },
        )
        .await?;

    assert_eq!(
        result,
        DataCleanupResult {
            participations_deleted: 1,
            join_requests_deleted: 1,
            jobs_deleted: 1,
        }
    );
    assert_eq!(Participation::find().count(db).await?, 3);
    assert_eq!(TeamJoinRequest::find().count(db).await?, 1);
    assert_eq!(OutboxJob::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a cancelled team leader's team is dissolved before the delete.
///
/// Expected: Ok with the team and its members gone
#[tokio::test]
async fn dissolves_team_of_cancelled_leader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let leader = factory::create_user(db).await?;
    let event = factory::create_team_event(db).await?;
    let leader_participation = factory::participation::ParticipationFactory::new(db, &leader, &event)
        .status("CANCELLED")
        .build()
        .await?;
    let team = factory::create_team(db, &event, &leader_participation).await?;
    factory::create_team_member(db, &team, &leader_participation).await?;
    let member = factory::create_user(db).await?;
    let member_participation = factory::create_participation(db, &member, &event).await?;
    factory::create_team_member(db, &team, &member_participation).await?;

    AdminService::new(db)
        .data_cleanup(
            &principal(&admin),
            DataCleanupParams {
                cancelled_participations: true,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(Team::find().count(db).await?, 0);
    assert_eq!(TeamMember::find().count(db).await?, 0);
    assert_eq!(Participation::find().count(db).await?, 1);

    Ok(())
}

/// Tests a cleanup requested by a non-admin.
///
/// Expected: Err(AuthErr) and nothing deleted
#[tokio::test]
async fn requires_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    factory::participation::ParticipationFactory::new(db, &user, &event)
        .status("CANCELLED")
        .build()
        .await?;

    let result = AdminService::new(db)
        .data_cleanup(
            &principal(&user),
            DataCleanupParams {
                cancelled_participations: true,
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));
    assert_eq!(Participation::find().count(db).await?, 1);

    Ok(())
}
