use super::*;
use test_utils::factory;

/// Tests that update merges supplied fields and keeps the rest.
///
/// Expected: Ok(Some(Gym)) with only the supplied field changed
#[tokio::test]
async fn merges_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let repo = GymRepository::new(db);

    let updated = repo
        .update(
            gym.id,
            UpdateGymParams {
                name: None,
                address: Some("2 Oak Ave".to_string()),
                contact: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, gym.name);
    assert_eq!(updated.address, "2 Oak Ave");
    assert_eq!(updated.contact, gym.contact);

    Ok(())
}

/// Tests updating a gym that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GymRepository::new(db)
        .update(
            999,
            UpdateGymParams {
                name: Some("Ghost Gym".to_string()),
                address: None,
                contact: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
