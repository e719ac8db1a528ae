use super::*;

/// Tests that the listing is ordered newest check-in first.
///
/// Expected: Ok(Vec<CheckIn>) sorted by descending created_at
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let student = factory::student::create_student(db, gym.id).await?;

    let monday = Utc.with_ymd_and_hms(2030, 4, 1, 7, 0, 0).unwrap();
    let friday = Utc.with_ymd_and_hms(2030, 4, 5, 7, 0, 0).unwrap();

    for stamp in [monday, friday] {
        entity::check_in::ActiveModel {
            student_id: ActiveValue::Set(student.id),
            created_at: ActiveValue::Set(stamp),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    let check_ins = CheckInRepository::new(db).get_by_student(student.id).await?;

    assert_eq!(check_ins.len(), 2);
    assert_eq!(check_ins[0].created_at, friday);
    assert_eq!(check_ins[1].created_at, monday);

    Ok(())
}

/// Tests that another student's check-ins are not included.
///
/// Expected: Ok(vec![]) for the student who never checked in
#[tokio::test]
async fn scopes_to_requested_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gym_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gym = factory::gym::create_gym(db).await?;
    let visitor = factory::student::create_student(db, gym.id).await?;
    let absentee = factory::student::create_student(db, gym.id).await?;

    factory::check_in::create_check_in(db, visitor.id).await?;

    let check_ins = CheckInRepository::new(db)
        .get_by_student(absentee.id)
        .await?;

    assert!(check_ins.is_empty());

    Ok(())
}
