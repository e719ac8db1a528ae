//! Enrollment business rules.
//!
//! Enrollment terms are always derived server-side from the plan: the end date
//! is the start plus the plan's duration in calendar months and the price is
//! the monthly price times the duration. Start dates are truncated to the hour
//! before any comparison, so "in the past" means "before the current hour".

use chrono::{DateTime, Months, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{enrollment::EnrollmentRepository, plan::PlanRepository, student::StudentRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::AuthContext,
        enrollment::{CreateEnrollmentParams, Enrollment, EnrollmentTerms, UpdateEnrollmentParams},
        plan::Plan,
        student::Student,
    },
    queue::{Job, JobQueue, WelcomeMailPayload},
    util::time::start_of_hour,
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
    queue: &'a JobQueue,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, queue: &'a JobQueue) -> Self {
        Self { db, queue }
    }

    /// Gets all enrollments of the caller's gym.
    pub async fn get_by_gym(&self, ctx: AuthContext) -> Result<Vec<Enrollment>, AppError> {
        EnrollmentRepository::new(self.db)
            .get_by_gym(ctx.gym_id)
            .await
            .map_err(Into::into)
    }

    /// Enrolls a student in a plan and enqueues a welcome notification.
    ///
    /// Checks run in a fixed order so the client always gets the most specific
    /// error: student exists, student not yet enrolled, plan exists, student
    /// belongs to the caller's gym, start hour not in the past.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment with derived terms
    /// - `Err(AppError::NotFound)` - Student or plan absent
    /// - `Err(AppError::Conflict)` - Student already enrolled
    /// - `Err(AppError::AuthErr)` - Student belongs to another gym
    /// - `Err(AppError::BadRequest)` - Start hour in the past
    pub async fn create(
        &self,
        ctx: AuthContext,
        params: CreateEnrollmentParams,
    ) -> Result<Enrollment, AppError> {
        let repo = EnrollmentRepository::new(self.db);

        let student = StudentRepository::new(self.db)
            .find_by_id(params.student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if repo.exists_for_student(student.id).await? {
            return Err(AppError::Conflict(
                "Student already has an enrollment".to_string(),
            ));
        }

        let plan = PlanRepository::new(self.db)
            .find_by_id(params.plan_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))?;

        if student.gym_id != ctx.gym_id {
            return Err(
                AuthError::GymAccessDenied("Student belongs to another gym".to_string()).into(),
            );
        }

        let start = start_of_hour(params.start_date);
        if start < start_of_hour(Utc::now()) {
            return Err(AppError::BadRequest(
                "Enrollment start date is in the past".to_string(),
            ));
        }

        let terms = derive_terms(&plan, start)?;
        let enrollment = repo.create(student.id, terms).await?;

        self.queue
            .enqueue(Job::WelcomeMail(welcome_payload(&student, &plan, &enrollment)));

        Ok(enrollment)
    }

    /// Reschedules or re-plans an enrollment, recomputing its derived terms.
    ///
    /// Omitted fields fall back to the stored enrollment. A start date is only
    /// re-validated against the current hour when the caller supplies one.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The updated enrollment
    /// - `Err(AppError::NotFound)` - Enrollment absent
    /// - `Err(AppError::AuthErr)` - Enrollment's student outside the caller's gym
    /// - `Err(AppError::BadRequest)` - Fallback plan vanished or start hour in the past
    pub async fn update(
        &self,
        ctx: AuthContext,
        id: i32,
        params: UpdateEnrollmentParams,
    ) -> Result<Enrollment, AppError> {
        let repo = EnrollmentRepository::new(self.db);

        let enrollment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        self.check_gym(ctx, enrollment.student_id).await?;

        let plan_id = params.plan_id.unwrap_or(enrollment.plan_id);
        let plan = PlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Plan not found".to_string()))?;

        let start = match params.start_date {
            Some(requested) => {
                let start = start_of_hour(requested);
                if start < start_of_hour(Utc::now()) {
                    return Err(AppError::BadRequest(
                        "Enrollment start date is in the past".to_string(),
                    ));
                }
                start
            }
            None => enrollment.start_date,
        };

        let terms = derive_terms(&plan, start)?;

        repo.update(id, terms)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))
    }

    /// Deletes an enrollment of the caller's gym.
    pub async fn delete(&self, ctx: AuthContext, id: i32) -> Result<(), AppError> {
        let repo = EnrollmentRepository::new(self.db);

        let enrollment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        self.check_gym(ctx, enrollment.student_id).await?;

        repo.delete(id).await?;

        Ok(())
    }

    /// Verifies the enrollment's student belongs to the caller's gym.
    async fn check_gym(&self, ctx: AuthContext, student_id: i32) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if student.gym_id != ctx.gym_id {
            return Err(
                AuthError::GymAccessDenied("Enrollment belongs to another gym".to_string()).into(),
            );
        }

        Ok(student)
    }
}

/// Derives end date and total price from the plan.
fn derive_terms(plan: &Plan, start: DateTime<Utc>) -> Result<EnrollmentTerms, AppError> {
    let months = u32::try_from(plan.duration_months)
        .map_err(|_| AppError::InternalError("Plan duration out of range".to_string()))?;

    let end_date = start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| AppError::BadRequest("Enrollment start date out of range".to_string()))?;

    Ok(EnrollmentTerms {
        plan_id: plan.id,
        start_date: start,
        end_date,
        price: plan.price * f64::from(plan.duration_months),
    })
}

fn welcome_payload(student: &Student, plan: &Plan, enrollment: &Enrollment) -> WelcomeMailPayload {
    WelcomeMailPayload {
        student_name: student.name.clone(),
        student_email: student.email.clone(),
        plan_title: plan.title.clone(),
        start_date: enrollment.start_date,
        end_date: enrollment.end_date,
        price: enrollment.price,
    }
}
