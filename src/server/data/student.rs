//! Student data repository for database operations.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{CreateStudentParams, Student, UpdateStudentParams};

/// Repository providing database operations for student management.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a student by id.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds a student by email.
    ///
    /// Used for duplicate-email checks; emails are unique across all gyms.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets all students of a gym, ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Students of the gym (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_gym(&self, gym_id: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::GymId.eq(gym_id))
            .order_by_asc(entity::student::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Creates a student owned by the given gym.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, gym_id: i32, params: CreateStudentParams) -> Result<Student, DbErr> {
        let entity = entity::prelude::Student::insert(entity::student::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            age: ActiveValue::Set(params.age),
            weight: ActiveValue::Set(params.weight),
            height: ActiveValue::Set(params.height),
            gym_id: ActiveValue::Set(gym_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Updates a student, merging provided fields over the stored record.
    ///
    /// Every column is written with its merged value so the update fires even
    /// when a caller supplies values equal to the stored ones. The owning gym
    /// is never changed here.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateStudentParams,
    ) -> Result<Option<Student>, DbErr> {
        let Some(existing) = entity::prelude::Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let entity = entity::prelude::Student::update(entity::student::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            name: ActiveValue::Set(params.name.unwrap_or(existing.name)),
            email: ActiveValue::Set(params.email.unwrap_or(existing.email)),
            age: ActiveValue::Set(params.age.unwrap_or(existing.age)),
            weight: ActiveValue::Set(params.weight.unwrap_or(existing.weight)),
            height: ActiveValue::Set(params.height.unwrap_or(existing.height)),
            gym_id: ActiveValue::Unchanged(existing.gym_id),
        })
        .exec(self.db)
        .await?;

        Ok(Some(Student::from_entity(entity)))
    }

    /// Deletes a student by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No student with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
