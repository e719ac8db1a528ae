//! Domain models for staff-account data operations.

use crate::model::user::{RegisterUserDto, UpdateUserDto, UserDto};

/// A staff account. The password hash lives in
/// [`AuthCredentials`](crate::server::model::auth::AuthCredentials) and is never
/// carried on this model.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Gym this account operates; scopes every authenticated request.
    pub gym_id: i32,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            gym_id: entity.gym_id,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            gym_id: self.gym_id,
        }
    }
}

/// Parameters for registering a staff account.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    /// Plaintext password; hashed by the service before it reaches the repository.
    pub password: String,
    pub gym_id: i32,
}

impl From<RegisterUserDto> for RegisterUserParams {
    fn from(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            gym_id: dto.gym_id,
        }
    }
}

/// Repository-level insert parameters, carrying the already-hashed password.
#[derive(Debug, Clone)]
pub struct InsertUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub gym_id: i32,
}

/// Repository-level update parameters, carrying the already-hashed password.
#[derive(Debug, Clone)]
pub struct UpdateUserRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Parameters for updating the caller's own account. Only provided fields are
/// changed.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserParams {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}
