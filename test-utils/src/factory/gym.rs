//! Gym factory for creating test gym entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gyms with customizable fields.
///
/// Provides a builder pattern for creating gym entities with default values
/// that can be overridden as needed for specific test scenarios.
pub struct GymFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    contact: String,
}

impl<'a> GymFactory<'a> {
    /// Creates a new GymFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Gym {id}"` where id is auto-incremented
    /// - address: `"{id} Main Street"`
    /// - contact: `"gym{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Gym {}", id),
            address: format!("{} Main Street", id),
            contact: format!("gym{}@example.com", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    /// Builds and inserts the gym entity into the database.
    pub async fn build(self) -> Result<entity::gym::Model, DbErr> {
        entity::gym::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            contact: ActiveValue::Set(self.contact),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gym with default values.
///
/// Shorthand for `GymFactory::new(db).build().await`.
pub async fn create_gym(db: &DatabaseConnection) -> Result<entity::gym::Model, DbErr> {
    GymFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_gym_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Gym).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let gym = create_gym(db).await?;

        assert!(!gym.name.is_empty());
        assert!(!gym.address.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_gyms() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Gym).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let gym1 = create_gym(db).await?;
        let gym2 = create_gym(db).await?;

        assert_ne!(gym1.id, gym2.id);
        assert_ne!(gym1.name, gym2.name);

        Ok(())
    }
}
