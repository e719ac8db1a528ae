//! Staff-user data repository for database operations.
//!
//! Handles staff account creation, updates, and credential lookups with proper
//! conversion between entity models and domain models at the infrastructure
//! boundary. Password hashes only surface through [`AuthCredentials`] for the
//! login flow; every other query returns hash-free [`User`] models.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    auth::AuthCredentials,
    user::{InsertUserParams, UpdateUserRecord, User},
};

/// Repository providing database operations for staff-account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a staff user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a staff user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a staff user by email together with their stored password hash.
    ///
    /// Used only by the login flow; the hash never leaves the session service.
    ///
    /// # Returns
    /// - `Ok(Some(AuthCredentials))` - User and hash found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials(&self, email: &str) -> Result<Option<AuthCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| AuthCredentials {
            password_hash: e.password_hash.clone(),
            user: User::from_entity(e),
        }))
    }

    /// Gets all staff of a gym, ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Staff of the gym (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_gym(&self, gym_id: i32) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::GymId.eq(gym_id))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Creates a staff user from parameter model.
    ///
    /// # Arguments
    /// - `params` - Insert parameters with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: InsertUserParams) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            gym_id: ActiveValue::Set(params.gym_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Updates a staff user, merging provided fields over the stored record.
    ///
    /// Every column is written with its merged value so the update fires even
    /// when a caller supplies values equal to the stored ones.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, record: UpdateUserRecord) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let entity = entity::prelude::User::update(entity::user::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            name: ActiveValue::Set(record.name.unwrap_or(existing.name)),
            email: ActiveValue::Set(record.email.unwrap_or(existing.email)),
            password_hash: ActiveValue::Set(
                record.password_hash.unwrap_or(existing.password_hash),
            ),
            gym_id: ActiveValue::Unchanged(existing.gym_id),
        })
        .exec(self.db)
        .await?;

        Ok(Some(User::from_entity(entity)))
    }
}
