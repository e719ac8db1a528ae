use super::*;

/// Tests that update merges supplied fields and never moves the student to
/// another gym.
///
/// Expected: Ok(Some(Student)) with merged fields and the original gym_id
#[tokio::test]
async fn merges_fields_and_keeps_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;

    let updated = StudentRepository::new(db)
        .update(
            student.id,
            UpdateStudentParams {
                name: None,
                email: None,
                age: Some(31),
                weight: Some(80.5),
                height: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.age, 31);
    assert_eq!(updated.weight, 80.5);
    assert_eq!(updated.name, student.name);
    assert_eq!(updated.gym_id, gym.id);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .update(
            999,
            UpdateStudentParams {
                name: Some("Ghost".to_string()),
                email: None,
                age: None,
                weight: None,
                height: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
