use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub weight: f64,
    pub height: String,
    pub gym_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateStudentDto {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub weight: f64,
    pub height: String,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub height: Option<String>,
}
