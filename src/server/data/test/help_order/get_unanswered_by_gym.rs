use super::*;

/// Tests that answered orders and other gyms' orders are filtered out.
///
/// Expected: Ok(Vec<HelpOrder>) containing only the gym's open orders
#[tokio::test]
async fn lists_only_open_orders_of_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;

    let open = factory::help_order::create_help_order(db, student.id).await?;
    factory::help_order::HelpOrderFactory::new(db, student.id)
        .answer("Handled at the front desk.")
        .build()
        .await?;

    let other_gym = factory::gym::create_gym(db).await?;
    let outsider = factory::student::create_student(db, other_gym.id).await?;
    factory::help_order::create_help_order(db, outsider.id).await?;

    let orders = HelpOrderRepository::new(db)
        .get_unanswered_by_gym(gym.id)
        .await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, open.id);
    assert_eq!(orders[0].answer, None);

    Ok(())
}

/// Tests listing open orders for a gym with none.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_gym_without_open_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;

    let orders = HelpOrderRepository::new(db)
        .get_unanswered_by_gym(gym.id)
        .await?;

    assert!(orders.is_empty());

    Ok(())
}
