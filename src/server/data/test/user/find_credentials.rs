use super::*;

/// Tests that credential lookup returns both user and stored hash.
///
/// Expected: Ok(Some(AuthCredentials)) with a verifiable bcrypt hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let user = factory::user::UserFactory::new(db, gym.id)
        .password("hunter22")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials(&user.email)
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert!(bcrypt::verify("hunter22", &credentials.password_hash).unwrap());

    Ok(())
}

/// Tests credential lookup for an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .find_credentials("nobody@example.com")
        .await?;

    assert!(result.is_none());

    Ok(())
}
