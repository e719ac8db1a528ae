//! Domain models for gym data operations.

use crate::model::gym::{CreateGymDto, GymDto, UpdateGymDto};

/// A gym, the tenant boundary for staff, students, and their records.
#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl Gym {
    /// Converts an entity model to a gym domain model at the repository boundary.
    pub fn from_entity(entity: entity::gym::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            contact: entity.contact,
        }
    }

    pub fn into_dto(self) -> GymDto {
        GymDto {
            id: self.id,
            name: self.name,
            address: self.address,
            contact: self.contact,
        }
    }
}

/// Parameters for creating a new gym.
#[derive(Debug, Clone)]
pub struct CreateGymParams {
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl From<CreateGymDto> for CreateGymParams {
    fn from(dto: CreateGymDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            contact: dto.contact,
        }
    }
}

/// Parameters for updating a gym. Only provided fields are changed.
#[derive(Debug, Clone)]
pub struct UpdateGymParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
}

impl From<UpdateGymDto> for UpdateGymParams {
    fn from(dto: UpdateGymDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            contact: dto.contact,
        }
    }
}
