use super::*;

/// Tests creating a staff user and reading it back.
///
/// Expected: Ok(User) without the password hash on the returned model
#[tokio::test]
async fn creates_user_for_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let repo = UserRepository::new(db);

    let created = repo
        .create(InsertUserParams {
            name: "Front Desk".to_string(),
            email: "desk@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            gym_id: gym.id,
        })
        .await?;

    assert_eq!(created.gym_id, gym.id);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that the email unique constraint rejects duplicates at the database
/// level.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let existing = factory::user::create_user(db, gym.id).await?;

    let result = UserRepository::new(db)
        .create(InsertUserParams {
            name: "Imposter".to_string(),
            email: existing.email,
            password_hash: "$2b$04$hash".to_string(),
            gym_id: gym.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
