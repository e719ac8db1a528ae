use super::*;

/// Tests deleting an existing plan.
///
/// Expected: Ok(true), and the plan is no longer findable
#[tokio::test]
async fn deletes_existing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::plan::create_plan(db).await?;

    let repo = PlanRepository::new(db);

    assert!(repo.delete(plan.id).await?);
    assert_eq!(repo.find_by_id(plan.id).await?, None);

    Ok(())
}

/// Tests deleting a plan that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PlanRepository::new(db).delete(999).await?);

    Ok(())
}
