//! Plan factory for creating test membership plans.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plans with customizable fields.
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    duration_months: i32,
    price: f64,
}

impl<'a> PlanFactory<'a> {
    /// Creates a new PlanFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Plan {id}"` where id is auto-incremented
    /// - duration_months: 3, price: 100.0
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Plan {}", id),
            duration_months: 3,
            price: 100.0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn duration_months(mut self, duration_months: i32) -> Self {
        self.duration_months = duration_months;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the plan entity into the database.
    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        entity::plan::ActiveModel {
            title: ActiveValue::Set(self.title),
            duration_months: ActiveValue::Set(self.duration_months),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plan with default values.
///
/// Shorthand for `PlanFactory::new(db).build().await`.
pub async fn create_plan(db: &DatabaseConnection) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db).build().await
}
