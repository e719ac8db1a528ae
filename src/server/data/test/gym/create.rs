use super::*;

/// Tests creating a gym and reading it back by id.
///
/// Expected: Ok(Gym) with an assigned id and the provided fields
#[tokio::test]
async fn creates_gym_with_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GymRepository::new(db);

    let created = repo
        .create(CreateGymParams {
            name: "Iron Temple".to_string(),
            address: "1 Main St".to_string(),
            contact: "555-0100".to_string(),
        })
        .await?;

    assert!(created.id > 0);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that get_all orders gyms alphabetically by name.
///
/// Expected: Ok(Vec<Gym>) sorted by name
#[tokio::test]
async fn get_all_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GymRepository::new(db);

    for name in ["Zenith Gym", "Apex Gym"] {
        repo.create(CreateGymParams {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            contact: "555-0100".to_string(),
        })
        .await?;
    }

    let gyms = repo.get_all().await?;

    assert_eq!(gyms.len(), 2);
    assert_eq!(gyms[0].name, "Apex Gym");
    assert_eq!(gyms[1].name, "Zenith Gym");

    Ok(())
}
