use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EnrollmentDto {
    pub id: i32,
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    /// Whether the enrollment covers the current instant.
    pub active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEnrollmentDto {
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
}

/// Partial update; omitted fields fall back to the stored enrollment.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateEnrollmentDto {
    pub plan_id: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
}
