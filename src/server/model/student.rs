//! Domain models for student data operations.

use crate::model::student::{CreateStudentDto, StudentDto, UpdateStudentDto};

/// A gym member.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    /// Weight in kilograms.
    pub weight: f64,
    /// Free-form height, e.g. "1.72m".
    pub height: String,
    /// Gym that owns this record.
    pub gym_id: i32,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            age: entity.age,
            weight: entity.weight,
            height: entity.height,
            gym_id: entity.gym_id,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            email: self.email,
            age: self.age,
            weight: self.weight,
            height: self.height,
            gym_id: self.gym_id,
        }
    }
}

/// Parameters for creating a student. The owning gym comes from the
/// authenticated caller, not the request body.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub weight: f64,
    pub height: String,
}

impl From<CreateStudentDto> for CreateStudentParams {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            age: dto.age,
            weight: dto.weight,
            height: dto.height,
        }
    }
}

/// Parameters for updating a student. Only provided fields are changed.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub height: Option<String>,
}

impl From<UpdateStudentDto> for UpdateStudentParams {
    fn from(dto: UpdateStudentDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            age: dto.age,
            weight: dto.weight,
            height: dto.height,
        }
    }
}
