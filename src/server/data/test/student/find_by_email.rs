use super::*;

/// Tests finding a student by email across gyms.
///
/// Expected: Ok(Some(Student)) regardless of which gym owns the record
#[tokio::test]
async fn finds_student_in_any_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;

    let found = StudentRepository::new(db)
        .find_by_email(&student.email)
        .await?
        .unwrap();

    assert_eq!(found.id, student.id);

    Ok(())
}

/// Tests lookup of an unregistered email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(result.is_none());

    Ok(())
}
