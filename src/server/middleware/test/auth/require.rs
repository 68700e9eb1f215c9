use super::*;

/// Tests a logged in user resolves to a principal.
///
/// Expected: Ok(Principal) carrying the user's id and email
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let principal = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(principal.user_id, user.id);
    assert_eq!(principal.email, user.email);
    assert!(!principal.admin);

    Ok(())
}

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::AuthenticationRequired)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationRequired))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests the admin permission for a regular user.
///
/// Expected: Err(AuthError::AdminRequired)
#[tokio::test]
async fn requires_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminRequired(_)))
    ));

    Ok(())
}

/// Tests the admin permission for an admin.
///
/// Expected: Ok(Principal) with admin set
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let principal = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(principal.admin);

    Ok(())
}
