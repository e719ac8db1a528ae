//! Help-order business rules.
//!
//! Students ask questions through public endpoints; staff list and answer them
//! through gym-scoped ones. Only enrolled students may use the help desk, and
//! answering an order enqueues exactly one notification job.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        enrollment::EnrollmentRepository, help_order::HelpOrderRepository,
        student::StudentRepository,
    },
    error::AppError,
    model::{auth::AuthContext, help_order::HelpOrder, student::Student},
    queue::{AnswerMailPayload, Job, JobQueue},
    util::validate::has_min_chars,
};

pub struct HelpOrderService<'a> {
    db: &'a DatabaseConnection,
    queue: &'a JobQueue,
}

impl<'a> HelpOrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, queue: &'a JobQueue) -> Self {
        Self { db, queue }
    }

    /// Files a question for an enrolled student.
    ///
    /// # Returns
    /// - `Ok(HelpOrder)` - The created, unanswered order
    /// - `Err(AppError::BadRequest)` - Question shorter than 3 characters
    /// - `Err(AppError::NotFound)` - Student absent
    /// - `Err(AppError::Conflict)` - Student has no enrollment
    pub async fn create(&self, student_id: i32, question: String) -> Result<HelpOrder, AppError> {
        if !has_min_chars(&question, 3) {
            return Err(AppError::BadRequest(
                "Question must be at least 3 characters".to_string(),
            ));
        }

        self.require_enrolled_student(student_id).await?;

        HelpOrderRepository::new(self.db)
            .create(student_id, question)
            .await
            .map_err(Into::into)
    }

    /// Gets all of an enrolled student's help orders, oldest first.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<HelpOrder>, AppError> {
        self.require_enrolled_student(student_id).await?;

        HelpOrderRepository::new(self.db)
            .get_by_student(student_id)
            .await
            .map_err(Into::into)
    }

    /// Gets the unanswered orders of the caller's gym, oldest first.
    pub async fn get_unanswered(&self, ctx: AuthContext) -> Result<Vec<HelpOrder>, AppError> {
        HelpOrderRepository::new(self.db)
            .get_unanswered_by_gym(ctx.gym_id)
            .await
            .map_err(Into::into)
    }

    /// Answers a help order of the caller's gym and enqueues the answer
    /// notification. Orders outside the gym are reported as absent.
    ///
    /// # Returns
    /// - `Ok(HelpOrder)` - The answered order with its answer timestamp set
    /// - `Err(AppError::BadRequest)` - Answer shorter than 3 characters
    /// - `Err(AppError::NotFound)` - No such order in the caller's gym
    pub async fn answer(
        &self,
        ctx: AuthContext,
        id: i32,
        answer: String,
    ) -> Result<HelpOrder, AppError> {
        if !has_min_chars(&answer, 3) {
            return Err(AppError::BadRequest(
                "Answer must be at least 3 characters".to_string(),
            ));
        }

        let repo = HelpOrderRepository::new(self.db);

        let order = repo
            .find_by_id_in_gym(id, ctx.gym_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Help order not found".to_string()))?;

        let student = StudentRepository::new(self.db)
            .find_by_id(order.student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let answered = repo
            .answer(id, answer, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Help order not found".to_string()))?;

        self.queue
            .enqueue(Job::AnswerMail(answer_payload(&student, &answered)));

        Ok(answered)
    }

    /// Deletes a help order of the caller's gym. Orders outside the gym are
    /// reported as absent.
    pub async fn delete(&self, ctx: AuthContext, id: i32) -> Result<(), AppError> {
        let repo = HelpOrderRepository::new(self.db);

        if repo.find_by_id_in_gym(id, ctx.gym_id).await?.is_none() {
            return Err(AppError::NotFound("Help order not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// The help desk is only open to enrolled students.
    async fn require_enrolled_student(&self, student_id: i32) -> Result<(), AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        if !EnrollmentRepository::new(self.db)
            .exists_for_student(student_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Student has no enrollment".to_string(),
            ));
        }

        Ok(())
    }
}

fn answer_payload(student: &Student, order: &HelpOrder) -> AnswerMailPayload {
    AnswerMailPayload {
        student_name: student.name.clone(),
        student_email: student.email.clone(),
        question: order.question.clone(),
        created_at: order.created_at,
        answer: order.answer.clone().unwrap_or_default(),
        answer_at: order.answer_at.unwrap_or(order.created_at),
    }
}
