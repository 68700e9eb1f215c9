use super::*;

/// Tests the first sign in of a Google account.
///
/// Expected: Ok with the email lowercased and the name falling back to the local part
#[tokio::test]
async fn creates_user_on_first_sign_in() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .sign_in(google_user("Ada.Lovelace@Example.com", None), &[])
        .await?;

    assert_eq!(user.email, "ada.lovelace@example.com");
    assert_eq!(user.name, "ada.lovelace");
    assert!(!user.admin);

    Ok(())
}

/// Tests signing in with an email on the admin list.
///
/// Expected: Ok with admin granted, and the same row on a second sign in
#[tokio::test]
async fn grants_admin_from_allow_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = vec!["staff@example.com".to_string()];

    let service = UserService::new(db);
    let first = service
        .sign_in(google_user("Staff@example.com", Some("Staff")), &admins)
        .await?;
    let second = service
        .sign_in(google_user("staff@example.com", Some("Staff")), &admins)
        .await?;

    assert!(first.admin);
    assert_eq!(first.id, second.id);

    Ok(())
}

/// Tests signing in with an unverified Google email.
///
/// Expected: Err(EmailNotVerified) and no user created
#[tokio::test]
async fn rejects_unverified_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut info = google_user("someone@example.com", None);
    info.email_verified = false;

    let result = UserService::new(db).sign_in(info, &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailNotVerified))
    ));
    assert!(User::find().all(db).await?.is_empty());

    Ok(())
}
