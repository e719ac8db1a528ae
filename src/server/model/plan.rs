//! Domain models for membership-plan data operations.

use crate::model::plan::{CreatePlanDto, PlanDto, UpdatePlanDto};

/// A membership plan. Plans are a global catalog shared by all gyms; the
/// enrollment snapshots the derived price so later plan edits do not rewrite
/// history.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub title: String,
    pub duration_months: i32,
    /// Monthly price.
    pub price: f64,
}

impl Plan {
    /// Converts an entity model to a plan domain model at the repository boundary.
    pub fn from_entity(entity: entity::plan::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            duration_months: entity.duration_months,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            title: self.title,
            duration_months: self.duration_months,
            price: self.price,
        }
    }
}

/// Parameters for creating a plan.
#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub title: String,
    pub duration_months: i32,
    pub price: f64,
}

impl From<CreatePlanDto> for CreatePlanParams {
    fn from(dto: CreatePlanDto) -> Self {
        Self {
            title: dto.title,
            duration_months: dto.duration_months,
            price: dto.price,
        }
    }
}

/// Parameters for updating a plan. Only provided fields are changed.
#[derive(Debug, Clone)]
pub struct UpdatePlanParams {
    pub title: Option<String>,
    pub duration_months: Option<i32>,
    pub price: Option<f64>,
}

impl From<UpdatePlanDto> for UpdatePlanParams {
    fn from(dto: UpdatePlanDto) -> Self {
        Self {
            title: dto.title,
            duration_months: dto.duration_months,
            price: dto.price,
        }
    }
}
