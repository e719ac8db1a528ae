//! User factory for creating test staff accounts.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Bcrypt cost used for test password hashes. Kept low so suites stay fast.
const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test staff users with customizable fields.
///
/// The `password` field is hashed with bcrypt before insertion, so the created
/// entity can authenticate through the real session flow in tests.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    gym_id: i32,
    name: String,
    email: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Staff {id}"` where id is auto-incremented
    /// - email: `"staff{id}@example.com"`
    /// - password: `"secret{id}"`
    pub fn new(db: &'a DatabaseConnection, gym_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            gym_id,
            name: format!("Staff {}", id),
            email: format!("staff{}@example.com", id),
            password: format!("secret{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or hash failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(password_hash),
            gym_id: ActiveValue::Set(self.gym_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff user with default values for the given gym.
///
/// Shorthand for `UserFactory::new(db, gym_id).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
    gym_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, gym_id).build().await
}
