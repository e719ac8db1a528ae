use super::*;

/// Tests writing the answer on an open order.
///
/// Expected: Ok(Some(HelpOrder)) with the answer set and the question intact
#[tokio::test]
async fn writes_answer_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;
    let order = factory::help_order::HelpOrderFactory::new(db, student.id)
        .question("Can I freeze my membership?")
        .build()
        .await?;

    let answered_at = Utc::now();
    let answered = HelpOrderRepository::new(db)
        .answer(order.id, "Yes, for up to two months.".to_string(), answered_at)
        .await?
        .unwrap();

    assert_eq!(answered.id, order.id);
    assert_eq!(answered.question, "Can I freeze my membership?");
    assert_eq!(answered.answer.as_deref(), Some("Yes, for up to two months."));
    assert_eq!(answered.answer_at, Some(answered_at));
    assert_eq!(answered.created_at, order.created_at);

    Ok(())
}

/// Tests answering an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let answered = HelpOrderRepository::new(db)
        .answer(999, "No one asked.".to_string(), Utc::now())
        .await?;

    assert_eq!(answered, None);

    Ok(())
}
