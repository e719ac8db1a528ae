use super::*;

/// Tests that update replaces the terms while the student binding stays put.
///
/// Expected: Ok(Some(Enrollment)) with the new terms and the original student
#[tokio::test]
async fn replaces_terms_and_keeps_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, _, enrollment) = factory::helpers::create_enrolled_student(db).await?;

    let new_plan = factory::plan::PlanFactory::new(db)
        .duration_months(6)
        .price(80.0)
        .build()
        .await?;

    let start = Utc.with_ymd_and_hms(2030, 3, 1, 9, 0, 0).unwrap();
    let end = start.checked_add_months(Months::new(6)).unwrap();

    let updated = EnrollmentRepository::new(db)
        .update(
            enrollment.id,
            EnrollmentTerms {
                plan_id: new_plan.id,
                start_date: start,
                end_date: end,
                price: 480.0,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, enrollment.id);
    assert_eq!(updated.student_id, student.id);
    assert_eq!(updated.plan_id, new_plan.id);
    assert_eq!(updated.start_date, start);
    assert_eq!(updated.end_date, end);
    assert_eq!(updated.price, 480.0);

    Ok(())
}

/// Tests updating an enrollment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2030, 3, 1, 9, 0, 0).unwrap();

    let updated = EnrollmentRepository::new(db)
        .update(
            999,
            EnrollmentTerms {
                plan_id: 1,
                start_date: start,
                end_date: start,
                price: 0.0,
            },
        )
        .await?;

    assert_eq!(updated, None);

    Ok(())
}
