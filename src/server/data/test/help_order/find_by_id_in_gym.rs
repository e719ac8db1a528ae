use super::*;

/// Tests looking up an order through its own gym.
///
/// Expected: Ok(Some(HelpOrder)) for the gym the student belongs to
#[tokio::test]
async fn finds_order_within_own_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;
    let order = factory::help_order::create_help_order(db, student.id).await?;

    let found = HelpOrderRepository::new(db)
        .find_by_id_in_gym(order.id, gym.id)
        .await?;

    assert_eq!(found.map(|o| o.id), Some(order.id));

    Ok(())
}

/// Tests that an order belonging to another gym's student is invisible.
///
/// Expected: Ok(None) for the foreign gym
#[tokio::test]
async fn hides_order_from_other_gyms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;
    let order = factory::help_order::create_help_order(db, student.id).await?;

    let other_gym = factory::gym::create_gym(db).await?;

    let found = HelpOrderRepository::new(db)
        .find_by_id_in_gym(order.id, other_gym.id)
        .await?;

    assert_eq!(found, None);

    Ok(())
}
