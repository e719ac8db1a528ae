use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CheckInDto {
    pub id: i32,
    pub student_id: i32,
    pub created_at: DateTime<Utc>,
}
