use super::*;

/// Tests that the listing is scoped to the requested gym via the student join
/// and ordered newest start first.
///
/// Expected: Ok(Vec<Enrollment>) containing only the gym's enrollments, sorted
#[tokio::test]
async fn scopes_to_gym_and_orders_by_start_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let plan = factory::plan::create_plan(db).await?;

    let early = factory::student::create_student(db, gym.id).await?;
    let late = factory::student::create_student(db, gym.id).await?;

    let january = Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap();
    let june = Utc.with_ymd_and_hms(2030, 6, 1, 8, 0, 0).unwrap();

    factory::enrollment::EnrollmentFactory::new(db, early.id, plan.id)
        .start_date(january)
        .build()
        .await?;
    factory::enrollment::EnrollmentFactory::new(db, late.id, plan.id)
        .start_date(june)
        .build()
        .await?;

    let other_gym = factory::gym::create_gym(db).await?;
    let outsider = factory::student::create_student(db, other_gym.id).await?;
    factory::enrollment::create_enrollment(db, outsider.id, plan.id).await?;

    let enrollments = EnrollmentRepository::new(db).get_by_gym(gym.id).await?;

    assert_eq!(enrollments.len(), 2);
    assert_eq!(enrollments[0].student_id, late.id);
    assert_eq!(enrollments[1].student_id, early.id);

    Ok(())
}

/// Tests listing enrollments for a gym with none.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_gym_without_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;

    let enrollments = EnrollmentRepository::new(db).get_by_gym(gym.id).await?;

    assert!(enrollments.is_empty());

    Ok(())
}
