//! Domain models for enrollment data operations.

use chrono::{DateTime, Utc};

use crate::model::enrollment::{CreateEnrollmentDto, EnrollmentDto, UpdateEnrollmentDto};

/// A student's membership period under a plan.
///
/// `end_date` and `price` are derived from the plan at enrollment time and
/// stored, so they survive later plan edits.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub plan_id: i32,
    /// Hour-aligned start of the membership.
    pub start_date: DateTime<Utc>,
    /// start_date plus the plan's duration in calendar months.
    pub end_date: DateTime<Utc>,
    /// Total price for the full duration.
    pub price: f64,
}

impl Enrollment {
    /// Converts an entity model to an enrollment domain model at the repository boundary.
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            plan_id: entity.plan_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            price: entity.price,
        }
    }

    /// Whether the enrollment covers the given instant.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    pub fn into_dto(self) -> EnrollmentDto {
        let active = self.is_active_at(Utc::now());
        EnrollmentDto {
            id: self.id,
            student_id: self.student_id,
            plan_id: self.plan_id,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            active,
        }
    }
}

/// Fully computed enrollment terms, ready to persist. Produced by the service
/// after plan resolution and date/price derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentTerms {
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
}

/// Parameters for enrolling a student.
#[derive(Debug, Clone)]
pub struct CreateEnrollmentParams {
    pub student_id: i32,
    pub plan_id: i32,
    /// Requested start; truncated to the hour by the service.
    pub start_date: DateTime<Utc>,
}

impl From<CreateEnrollmentDto> for CreateEnrollmentParams {
    fn from(dto: CreateEnrollmentDto) -> Self {
        Self {
            student_id: dto.student_id,
            plan_id: dto.plan_id,
            start_date: dto.start_date,
        }
    }
}

/// Parameters for rescheduling or re-planning an enrollment. Omitted fields
/// fall back to the stored enrollment.
#[derive(Debug, Clone)]
pub struct UpdateEnrollmentParams {
    pub plan_id: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
}

impl From<UpdateEnrollmentDto> for UpdateEnrollmentParams {
    fn from(dto: UpdateEnrollmentDto) -> Self {
        Self {
            plan_id: dto.plan_id,
            start_date: dto.start_date,
        }
    }
}
