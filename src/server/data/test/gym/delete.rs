use super::*;
use test_utils::factory;

/// Tests deleting an existing gym.
///
/// Expected: Ok(true), and the gym is no longer findable
#[tokio::test]
async fn deletes_existing_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let repo = GymRepository::new(db);

    assert!(repo.delete(gym.id).await?);
    assert!(repo.find_by_id(gym.id).await?.is_none());

    Ok(())
}

/// Tests deleting a gym that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!GymRepository::new(db).delete(999).await?);

    Ok(())
}
