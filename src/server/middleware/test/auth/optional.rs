use super::*;

/// Tests an anonymous caller is not an error for optional auth.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_is_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let principal = AuthGuard::new(db, session).optional().await?;

    assert!(principal.is_none());

    Ok(())
}

/// Tests logging out clears the user.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn cleared_session_is_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    let auth = AuthSession::new(session);
    auth.set_user_id(user.id).await?;
    auth.clear().await;

    let principal = AuthGuard::new(db, session).optional().await?;

    assert!(principal.is_none());

    Ok(())
}
