//! Membership-plan data repository for database operations.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::plan::{CreatePlanParams, Plan, UpdatePlanParams};

/// Repository providing database operations for the plan catalog.
pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all plans, ordered by ascending duration.
    ///
    /// # Returns
    /// - `Ok(Vec<Plan>)` - All plans (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Plan>, DbErr> {
        let entities = entity::prelude::Plan::find()
            .order_by_asc(entity::plan::Column::DurationMonths)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Plan::from_entity).collect())
    }

    /// Finds a plan by id.
    ///
    /// # Returns
    /// - `Ok(Some(Plan))` - Plan found
    /// - `Ok(None)` - No plan with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Plan>, DbErr> {
        let entity = entity::prelude::Plan::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Plan::from_entity))
    }

    /// Creates a plan from parameter model.
    ///
    /// # Returns
    /// - `Ok(Plan)` - The created plan with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, DbErr> {
        let entity = entity::prelude::Plan::insert(entity::plan::ActiveModel {
            title: ActiveValue::Set(params.title),
            duration_months: ActiveValue::Set(params.duration_months),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Plan::from_entity(entity))
    }

    /// Updates a plan, merging provided fields over the stored record.
    ///
    /// Existing enrollments keep their snapshotted price and end date; plan
    /// edits only affect future enrollments.
    ///
    /// # Returns
    /// - `Ok(Some(Plan))` - The updated plan
    /// - `Ok(None)` - No plan with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, params: UpdatePlanParams) -> Result<Option<Plan>, DbErr> {
        let Some(existing) = entity::prelude::Plan::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let entity = entity::prelude::Plan::update(entity::plan::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            title: ActiveValue::Set(params.title.unwrap_or(existing.title)),
            duration_months: ActiveValue::Set(
                params.duration_months.unwrap_or(existing.duration_months),
            ),
            price: ActiveValue::Set(params.price.unwrap_or(existing.price)),
        })
        .exec(self.db)
        .await?;

        Ok(Some(Plan::from_entity(entity)))
    }

    /// Deletes a plan by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Plan deleted
    /// - `Ok(false)` - No plan with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Plan::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
