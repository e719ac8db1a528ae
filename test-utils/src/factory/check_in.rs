//! Check-in factory for creating test visit records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a check-in for the given student, stamped with the current time.
pub async fn create_check_in(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::check_in::Model, DbErr> {
    entity::check_in::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
