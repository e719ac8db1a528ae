use super::*;

/// Tests the existence check before and after an enrollment is created.
///
/// Expected: Ok(false) for an unenrolled student, Ok(true) once enrolled
#[tokio::test]
async fn reflects_student_enrollment_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;
    let plan = factory::plan::create_plan(db).await?;

    let repo = EnrollmentRepository::new(db);

    assert!(!repo.exists_for_student(student.id).await?);

    factory::enrollment::create_enrollment(db, student.id, plan.id).await?;

    assert!(repo.exists_for_student(student.id).await?);

    Ok(())
}

/// Tests that another student's enrollment does not count.
///
/// Expected: Ok(false) for the student without an enrollment
#[tokio::test]
async fn ignores_other_students_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_enrolled_student(db).await?;

    let gym = factory::gym::create_gym(db).await?;
    let unenrolled = factory::student::create_student(db, gym.id).await?;

    assert!(
        !EnrollmentRepository::new(db)
            .exists_for_student(unenrolled.id)
            .await?
    );

    Ok(())
}
