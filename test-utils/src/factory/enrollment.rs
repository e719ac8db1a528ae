//! Enrollment factory for linking test students to plans.

use chrono::{Months, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments with customizable fields.
///
/// By default the enrollment starts now, ends three months later, and costs
/// 300.0, mirroring the default plan factory (3 months at 100.0).
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    plan_id: i32,
    start_date: chrono::DateTime<Utc>,
    end_date: chrono::DateTime<Utc>,
    price: f64,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates a new EnrollmentFactory with default values.
    pub fn new(db: &'a DatabaseConnection, student_id: i32, plan_id: i32) -> Self {
        let start = Utc::now();
        let end = start.checked_add_months(Months::new(3)).unwrap_or(start);
        Self {
            db,
            student_id,
            plan_id,
            start_date: start,
            end_date: end,
            price: 300.0,
        }
    }

    pub fn start_date(mut self, start_date: chrono::DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: chrono::DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the enrollment entity into the database.
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            plan_id: ActiveValue::Set(self.plan_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enrollment with default values for the given student and plan.
///
/// Shorthand for `EnrollmentFactory::new(db, student_id, plan_id).build().await`.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_id: i32,
    plan_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, student_id, plan_id).build().await
}
