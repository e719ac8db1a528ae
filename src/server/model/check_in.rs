use chrono::{DateTime, Utc};

use crate::model::check_in::CheckInDto;

/// A single attendance record.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub id: i32,
    pub student_id: i32,
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    pub fn from_entity(entity: entity::check_in::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CheckInDto {
        CheckInDto {
            id: self.id,
            student_id: self.student_id,
            created_at: self.created_at,
        }
    }
}
