use super::*;

/// Tests updating the editable profile columns.
///
/// Expected: Ok(Some) with name, phone and college replaced
#[tokio::test]
async fn updates_profile_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            &UpdateProfileParams {
                name: "Grace Hopper".to_string(),
                phone: Some("9123456780".to_string()),
                college: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Grace Hopper");
    assert_eq!(updated.phone.as_deref(), Some("9123456780"));
    assert_eq!(updated.college, None);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(
            999,
            &UpdateProfileParams {
                name: "Nobody".to_string(),
                phone: None,
                college: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
