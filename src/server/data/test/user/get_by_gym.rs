use super::*;

/// Tests that the listing is scoped to the requested gym.
///
/// Expected: Ok(Vec<User>) containing only the gym's own staff
#[tokio::test]
async fn excludes_other_gyms_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let other_gym = factory::gym::create_gym(db).await?;
    let staff = factory::user::create_user(db, gym.id).await?;
    factory::user::create_user(db, other_gym.id).await?;

    let users = UserRepository::new(db).get_by_gym(gym.id).await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, staff.id);

    Ok(())
}
