use super::*;

/// Tests that deleting a student cascades to their dependent records.
///
/// Expected: Ok(true), and the student's check-ins are gone
#[tokio::test]
async fn deletes_student_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;
    factory::check_in::create_check_in(db, student.id).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.delete(student.id).await?);
    assert!(repo.find_by_id(student.id).await?.is_none());

    let check_ins = crate::server::data::check_in::CheckInRepository::new(db)
        .get_by_student(student.id)
        .await?;
    assert!(check_ins.is_empty());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gym)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!StudentRepository::new(db).delete(999).await?);

    Ok(())
}
