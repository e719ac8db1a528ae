//! Domain models for help-desk questions.

use chrono::{DateTime, Utc};

use crate::model::help_order::HelpOrderDto;

/// A student's question, optionally answered by gym staff.
#[derive(Debug, Clone, PartialEq)]
pub struct HelpOrder {
    pub id: i32,
    pub student_id: i32,
    pub question: String,
    pub answer: Option<String>,
    /// Set exactly when the answer is written.
    pub answer_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl HelpOrder {
    pub fn from_entity(entity: entity::help_order::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            question: entity.question,
            answer: entity.answer,
            answer_at: entity.answer_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> HelpOrderDto {
        HelpOrderDto {
            id: self.id,
            student_id: self.student_id,
            question: self.question,
            answer: self.answer,
            answer_at: self.answer_at,
            created_at: self.created_at,
        }
    }
}
