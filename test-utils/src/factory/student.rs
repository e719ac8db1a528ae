//! Student factory for creating test gym members.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    gym_id: i32,
    name: String,
    email: String,
    age: i32,
    weight: f64,
    height: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - email: `"student{id}@example.com"`
    /// - age: 25, weight: 75.0, height: "1.75"
    pub fn new(db: &'a DatabaseConnection, gym_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            gym_id,
            name: format!("Student {}", id),
            email: format!("student{}@example.com", id),
            age: 25,
            weight: 75.0,
            height: "1.75".to_string(),
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

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            age: ActiveValue::Set(self.age),
            weight: ActiveValue::Set(self.weight),
            height: ActiveValue::Set(self.height),
            gym_id: ActiveValue::Set(self.gym_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values for the given gym.
///
/// Shorthand for `StudentFactory::new(db, gym_id).build().await`.
pub async fn create_student(
    db: &DatabaseConnection,
    gym_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, gym_id).build().await
}
