//! Enrollment data repository for database operations.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::enrollment::{Enrollment, EnrollmentTerms};

/// Repository providing database operations for enrollment management.
///
/// Gym-scoped queries join through the student table, since enrollments carry
/// no gym column of their own.
pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an enrollment by id.
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - Enrollment found
    /// - `Ok(None)` - No enrollment with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Enrollment::from_entity))
    }

    /// Checks whether the student has any enrollment.
    ///
    /// Backs the single-enrollment rule; there is no unique index on
    /// student_id, so this existence query is the only guard.
    ///
    /// # Returns
    /// - `Ok(true)` - Student has at least one enrollment
    /// - `Ok(false)` - Student has none
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_for_student(&self, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all enrollments whose student belongs to the given gym, newest
    /// start first.
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - Enrollments of the gym (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_gym(&self, gym_id: i32) -> Result<Vec<Enrollment>, DbErr> {
        let entities = entity::prelude::Enrollment::find()
            .join(JoinType::InnerJoin, entity::enrollment::Relation::Student.def())
            .filter(entity::student::Column::GymId.eq(gym_id))
            .order_by_desc(entity::enrollment::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    /// Creates an enrollment from fully computed terms.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        student_id: i32,
        terms: EnrollmentTerms,
    ) -> Result<Enrollment, DbErr> {
        let entity = entity::prelude::Enrollment::insert(entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            plan_id: ActiveValue::Set(terms.plan_id),
            start_date: ActiveValue::Set(terms.start_date),
            end_date: ActiveValue::Set(terms.end_date),
            price: ActiveValue::Set(terms.price),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Enrollment::from_entity(entity))
    }

    /// Replaces an enrollment's terms. The student binding never changes.
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - The updated enrollment
    /// - `Ok(None)` - No enrollment with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        terms: EnrollmentTerms,
    ) -> Result<Option<Enrollment>, DbErr> {
        let Some(existing) = entity::prelude::Enrollment::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let entity = entity::prelude::Enrollment::update(entity::enrollment::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            student_id: ActiveValue::Unchanged(existing.student_id),
            plan_id: ActiveValue::Set(terms.plan_id),
            start_date: ActiveValue::Set(terms.start_date),
            end_date: ActiveValue::Set(terms.end_date),
            price: ActiveValue::Set(terms.price),
        })
        .exec(self.db)
        .await?;

        Ok(Some(Enrollment::from_entity(entity)))
    }

    /// Deletes an enrollment by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Enrollment deleted
    /// - `Ok(false)` - No enrollment with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Enrollment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
