use super::*;

/// Tests that update merges supplied fields and keeps the stored hash when no
/// new password is provided.
///
/// Expected: Ok(Some(User)) with the new name and unchanged credentials
#[tokio::test]
async fn keeps_hash_when_password_not_supplied() -> Result<(), DbErr> {
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

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserRecord {
                name: Some("Renamed Staff".to_string()),
                email: None,
                password_hash: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed Staff");
    assert_eq!(updated.email, user.email);

    let credentials = repo.find_credentials(&user.email).await?.unwrap();
    assert!(bcrypt::verify("hunter22", &credentials.password_hash).unwrap());

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(
            999,
            UpdateUserRecord {
                name: Some("Ghost".to_string()),
                email: None,
                password_hash: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
