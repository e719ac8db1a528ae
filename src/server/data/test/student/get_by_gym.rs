use super::*;

/// Tests that the listing is scoped to the requested gym and ordered by name.
///
/// Expected: Ok(Vec<Student>) containing only the gym's own students, sorted
#[tokio::test]
async fn scopes_and_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let other_gym = factory::gym::create_gym(db).await?;

    factory::student::StudentFactory::new(db, gym.id)
        .name("Zelda")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, gym.id)
        .name("Alice")
        .build()
        .await?;
    factory::student::create_student(db, other_gym.id).await?;

    let students = StudentRepository::new(db).get_by_gym(gym.id).await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].name, "Alice");
    assert_eq!(students[1].name, "Zelda");

    Ok(())
}
