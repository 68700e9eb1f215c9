use super::*;

fn param(email: &str, name: &str, grant_admin: bool) -> UpsertUserParam {
    UpsertUserParam {
        email: email.to_string(),
        name: name.to_string(),
        image: None,
        grant_admin,
    }
}

/// Tests creating a new user on first login.
///
/// Expected: Ok with user created and admin status set to false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("ada@example.com", "Ada", false)).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert!(!user.admin);

    Ok(())
}

/// Tests that a later login refreshes the name but never revokes admin.
///
/// Expected: Ok with one row, name updated, admin still true
#[tokio::test]
async fn updates_name_and_preserves_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(param("ada@example.com", "Ada", true)).await?;
    let second = repo
        .upsert(param("ada@example.com", "Ada Lovelace", false))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Ada Lovelace");
    assert!(second.admin);

    Ok(())
}

/// Tests that an admin grant is applied to an existing user.
///
/// Expected: Ok with admin set to true
#[tokio::test]
async fn grants_admin_to_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("staff@example.com")
        .build()
        .await?;
    assert!(!existing.admin);

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("staff@example.com", "Staff", true)).await?;

    assert_eq!(user.id, existing.id);
    assert!(user.admin);

    Ok(())
}
