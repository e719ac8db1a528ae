use sea_orm::DatabaseConnection;

use crate::server::{
    data::gym::GymRepository,
    error::AppError,
    model::{
        auth::AuthContext,
        gym::{CreateGymParams, Gym, UpdateGymParams},
    },
    util::validate::has_min_chars,
};

pub struct GymService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GymService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all gyms. Public, used by the registration flow to pick a gym.
    pub async fn get_all(&self) -> Result<Vec<Gym>, AppError> {
        GymRepository::new(self.db).get_all().await.map_err(Into::into)
    }

    /// Creates a gym after validating its fields.
    pub async fn create(&self, params: CreateGymParams) -> Result<Gym, AppError> {
        if !has_min_chars(&params.name, 3) {
            return Err(AppError::BadRequest(
                "Gym name must be at least 3 characters".to_string(),
            ));
        }
        if params.address.is_empty() {
            return Err(AppError::BadRequest("Gym address must not be empty".to_string()));
        }
        if params.contact.is_empty() {
            return Err(AppError::BadRequest("Gym contact must not be empty".to_string()));
        }

        GymRepository::new(self.db)
            .create(params)
            .await
            .map_err(Into::into)
    }

    /// Updates the caller's own gym. Only supplied fields are validated and
    /// changed.
    pub async fn update(&self, ctx: AuthContext, params: UpdateGymParams) -> Result<Gym, AppError> {
        if let Some(name) = &params.name {
            if !has_min_chars(name, 3) {
                return Err(AppError::BadRequest(
                    "Gym name must be at least 3 characters".to_string(),
                ));
            }
        }
        if let Some(address) = &params.address {
            if address.is_empty() {
                return Err(AppError::BadRequest("Gym address must not be empty".to_string()));
            }
        }
        if let Some(contact) = &params.contact {
            if contact.is_empty() {
                return Err(AppError::BadRequest("Gym contact must not be empty".to_string()));
            }
        }

        GymRepository::new(self.db)
            .update(ctx.gym_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Gym not found".to_string()))
    }

    /// Deletes the caller's own gym.
    pub async fn delete(&self, ctx: AuthContext) -> Result<(), AppError> {
        let deleted = GymRepository::new(self.db).delete(ctx.gym_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Gym not found".to_string()));
        }

        Ok(())
    }
}
