use super::*;

/// Tests creating a plan and reading it back by id.
///
/// Expected: Ok(Plan) with an assigned id and the provided fields
#[tokio::test]
async fn creates_plan_with_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);

    let created = repo
        .create(CreatePlanParams {
            title: "Gold".to_string(),
            duration_months: 6,
            price: 90.0,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.duration_months, 6);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that get_all orders plans by ascending duration.
///
/// Expected: Ok(Vec<Plan>) sorted shortest plan first
#[tokio::test]
async fn get_all_orders_by_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::plan::PlanFactory::new(db)
        .duration_months(12)
        .build()
        .await?;
    factory::plan::PlanFactory::new(db)
        .duration_months(1)
        .build()
        .await?;

    let plans = PlanRepository::new(db).get_all().await?;

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].duration_months, 1);
    assert_eq!(plans[1].duration_months, 12);

    Ok(())
}
