use sea_orm::DatabaseConnection;

use crate::server::{
    data::{check_in::CheckInRepository, student::StudentRepository},
    error::AppError,
    model::check_in::CheckIn,
};

/// Check-in flow. These endpoints are student-facing kiosks, so they are keyed
/// by student id rather than an authenticated staff context.
pub struct CheckInService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckInService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a student's check-in history, newest first.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<CheckIn>, AppError> {
        self.require_student(student_id).await?;

        CheckInRepository::new(self.db)
            .get_by_student(student_id)
            .await
            .map_err(Into::into)
    }

    /// Records a check-in for the student at the current time.
    pub async fn create(&self, student_id: i32) -> Result<CheckIn, AppError> {
        self.require_student(student_id).await?;

        CheckInRepository::new(self.db)
            .create(student_id)
            .await
            .map_err(Into::into)
    }

    async fn require_student(&self, student_id: i32) -> Result<(), AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        Ok(())
    }
}
