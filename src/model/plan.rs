use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlanDto {
    pub id: i32,
    pub title: String,
    pub duration_months: i32,
    pub price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePlanDto {
    pub title: String,
    pub duration_months: i32,
    pub price: f64,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePlanDto {
    pub title: Option<String>,
    pub duration_months: Option<i32>,
    pub price: Option<f64>,
}
