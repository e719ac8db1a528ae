//! Gym data repository for database operations.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::gym::{CreateGymParams, Gym, UpdateGymParams};

/// Repository providing database operations for gym management.
pub struct GymRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GymRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all gyms, ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Gym>)` - All gyms (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Gym>, DbErr> {
        let entities = entity::prelude::Gym::find()
            .order_by_asc(entity::gym::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Gym::from_entity).collect())
    }

    /// Finds a gym by id.
    ///
    /// # Returns
    /// - `Ok(Some(Gym))` - Gym found
    /// - `Ok(None)` - No gym with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Gym>, DbErr> {
        let entity = entity::prelude::Gym::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Gym::from_entity))
    }

    /// Creates a gym from parameter model.
    ///
    /// # Returns
    /// - `Ok(Gym)` - The created gym with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateGymParams) -> Result<Gym, DbErr> {
        let entity = entity::prelude::Gym::insert(entity::gym::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            contact: ActiveValue::Set(params.contact),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Gym::from_entity(entity))
    }

    /// Updates a gym, merging provided fields over the stored record.
    ///
    /// Every column is written with its merged value so the update fires even
    /// when a caller supplies values equal to the stored ones.
    ///
    /// # Returns
    /// - `Ok(Some(Gym))` - The updated gym
    /// - `Ok(None)` - No gym with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, params: UpdateGymParams) -> Result<Option<Gym>, DbErr> {
        let Some(existing) = entity::prelude::Gym::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let entity = entity::prelude::Gym::update(entity::gym::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            name: ActiveValue::Set(params.name.unwrap_or(existing.name)),
            address: ActiveValue::Set(params.address.unwrap_or(existing.address)),
            contact: ActiveValue::Set(params.contact.unwrap_or(existing.contact)),
        })
        .exec(self.db)
        .await?;

        Ok(Some(Gym::from_entity(entity)))
    }

    /// Deletes a gym by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Gym deleted
    /// - `Ok(false)` - No gym with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Gym::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
