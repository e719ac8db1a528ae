//! Check-in data repository. Check-ins are append-only attendance rows.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::check_in::CheckIn;

pub struct CheckInRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckInRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a student's check-ins, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<CheckIn>)` - Check-ins of the student (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<CheckIn>, DbErr> {
        let entities = entity::prelude::CheckIn::find()
            .filter(entity::check_in::Column::StudentId.eq(student_id))
            .order_by_desc(entity::check_in::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CheckIn::from_entity).collect())
    }

    /// Appends a check-in for the student, stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(CheckIn)` - The created check-in
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, student_id: i32) -> Result<CheckIn, DbErr> {
        let entity = entity::prelude::CheckIn::insert(entity::check_in::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(CheckIn::from_entity(entity))
    }
}
