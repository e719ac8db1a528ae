use super::*;

/// Tests that create stamps the check-in and it shows up for the student.
///
/// Expected: Ok(CheckIn) with an assigned id, listed afterwards
#[tokio::test]
async fn creates_timestamped_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;

    let repo = CheckInRepository::new(db);

    let before = Utc::now();
    let check_in = repo.create(student.id).await?;

    assert!(check_in.id > 0);
    assert_eq!(check_in.student_id, student.id);
    assert!(check_in.created_at >= before);

    let check_ins = repo.get_by_student(student.id).await?;
    assert_eq!(check_ins, vec![check_in]);

    Ok(())
}
