//! Help-order factory for creating test student questions.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test help orders with customizable fields.
///
/// Created orders are unanswered by default; use `answer()` to seed an
/// already-answered order.
pub struct HelpOrderFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    question: String,
    answer: Option<String>,
}

impl<'a> HelpOrderFactory<'a> {
    /// Creates a new HelpOrderFactory with default values.
    ///
    /// Defaults:
    /// - question: `"Question {id}?"` where id is auto-incremented
    /// - answer: `None`
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id,
            question: format!("Question {}?", id),
            answer: None,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Builds and inserts the help-order entity into the database.
    pub async fn build(self) -> Result<entity::help_order::Model, DbErr> {
        let now = Utc::now();
        let answer_at = self.answer.as_ref().map(|_| now);

        entity::help_order::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            answer_at: ActiveValue::Set(answer_at),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unanswered help order with default values for the given student.
///
/// Shorthand for `HelpOrderFactory::new(db, student_id).build().await`.
pub async fn create_help_order(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::help_order::Model, DbErr> {
    HelpOrderFactory::new(db, student_id).build().await
}
