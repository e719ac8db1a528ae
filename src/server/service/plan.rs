use sea_orm::DatabaseConnection;

use crate::server::{
    data::plan::PlanRepository,
    error::AppError,
    model::plan::{CreatePlanParams, Plan, UpdatePlanParams},
    util::validate::has_min_chars,
};

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the full plan catalog.
    pub async fn get_all(&self) -> Result<Vec<Plan>, AppError> {
        PlanRepository::new(self.db).get_all().await.map_err(Into::into)
    }

    /// Gets a single plan by id.
    pub async fn get(&self, id: i32) -> Result<Plan, AppError> {
        PlanRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))
    }

    /// Creates a plan after validating its fields.
    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, AppError> {
        validate_fields(
            Some(&params.title),
            Some(params.duration_months),
            Some(params.price),
        )?;

        PlanRepository::new(self.db)
            .create(params)
            .await
            .map_err(Into::into)
    }

    /// Updates a plan. Only supplied fields are validated and changed.
    /// Existing enrollments keep their snapshotted terms.
    pub async fn update(&self, id: i32, params: UpdatePlanParams) -> Result<Plan, AppError> {
        validate_fields(params.title.as_deref(), params.duration_months, params.price)?;

        PlanRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))
    }

    /// Deletes a plan by id.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = PlanRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Plan not found".to_string()));
        }

        Ok(())
    }
}

fn validate_fields(
    title: Option<&str>,
    duration_months: Option<i32>,
    price: Option<f64>,
) -> Result<(), AppError> {
    if let Some(title) = title {
        if !has_min_chars(title, 3) {
            return Err(AppError::BadRequest(
                "Plan title must be at least 3 characters".to_string(),
            ));
        }
    }
    if let Some(duration) = duration_months {
        if duration < 1 {
            return Err(AppError::BadRequest(
                "Plan duration must be at least 1 month".to_string(),
            ));
        }
    }
    if let Some(price) = price {
        if price < 0.0 {
            return Err(AppError::BadRequest(
                "Plan price must not be negative".to_string(),
            ));
        }
    }

    Ok(())
}
