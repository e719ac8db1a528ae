use super::*;

/// Tests that update merges provided fields over the stored record.
///
/// Expected: Ok(Some(Plan)) with the new price and the original title
#[tokio::test]
async fn merges_partial_update_over_existing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::plan::PlanFactory::new(db)
        .title("Silver")
        .duration_months(3)
        .price(100.0)
        .build()
        .await?;

    let updated = PlanRepository::new(db)
        .update(
            plan.id,
            UpdatePlanParams {
                title: None,
                duration_months: None,
                price: Some(80.0),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Silver");
    assert_eq!(updated.duration_months, 3);
    assert_eq!(updated.price, 80.0);

    Ok(())
}

/// Tests updating a plan that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PlanRepository::new(db)
        .update(
            999,
            UpdatePlanParams {
                title: Some("Ghost".to_string()),
                duration_months: None,
                price: None,
            },
        )
        .await?;

    assert_eq!(updated, None);

    Ok(())
}
