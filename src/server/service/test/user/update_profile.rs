use super::*;

/// Tests that a profile edit is copied to registrations and team memberships.
///
/// Expected: Ok with the participation and team member snapshots updated
#[tokio::test]
async fn syncs_registration_snapshots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (leader, _, participation, _) = factory::helpers::create_team_with_leader(db).await?;

    let updated = UserService::new(db)
        .update_profile(
            &principal(&leader),
            UpdateProfileParams {
                name: "Grace Hopper".to_string(),
                phone: Some("9123456780".to_string()),
                college: Some("Navy College".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "Grace Hopper");

    let stored = Participation::find_by_id(participation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Grace Hopper");
    assert_eq!(stored.phone, "9123456780");
    assert_eq!(stored.college, "Navy College");

    let member = TeamMember::find().one(db).await?.unwrap();
    assert_eq!(member.name, "Grace Hopper");

    Ok(())
}
