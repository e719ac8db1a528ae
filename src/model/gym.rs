use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GymDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub contact: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateGymDto {
    pub name: String,
    pub address: String,
    pub contact: String,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateGymDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
}
