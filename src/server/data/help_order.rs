//! Help-order data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::help_order::HelpOrder;

/// Repository providing database operations for help-desk questions.
///
/// Staff-facing lookups are scoped to a gym by joining through the student
/// table, so a single query answers both "does it exist" and "may this gym
/// touch it".
pub struct HelpOrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HelpOrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all of a student's help orders, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<HelpOrder>)` - The student's help orders (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<HelpOrder>, DbErr> {
        let entities = entity::prelude::HelpOrder::find()
            .filter(entity::help_order::Column::StudentId.eq(student_id))
            .order_by_asc(entity::help_order::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(HelpOrder::from_entity).collect())
    }

    /// Gets the unanswered help orders of a gym's students, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<HelpOrder>)` - Unanswered orders of the gym (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_unanswered_by_gym(&self, gym_id: i32) -> Result<Vec<HelpOrder>, DbErr> {
        let entities = entity::prelude::HelpOrder::find()
            .join(JoinType::InnerJoin, entity::help_order::Relation::Student.def())
            .filter(entity::student::Column::GymId.eq(gym_id))
            .filter(entity::help_order::Column::Answer.is_null())
            .order_by_asc(entity::help_order::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(HelpOrder::from_entity).collect())
    }

    /// Finds a help order by id, restricted to the given gym's students.
    ///
    /// An order belonging to another gym is indistinguishable from an absent
    /// one, so staff cannot probe other gyms' ids.
    ///
    /// # Returns
    /// - `Ok(Some(HelpOrder))` - Order found within the gym
    /// - `Ok(None)` - No such order in this gym
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_in_gym(
        &self,
        id: i32,
        gym_id: i32,
    ) -> Result<Option<HelpOrder>, DbErr> {
        let entity = entity::prelude::HelpOrder::find_by_id(id)
            .join(JoinType::InnerJoin, entity::help_order::Relation::Student.def())
            .filter(entity::student::Column::GymId.eq(gym_id))
            .one(self.db)
            .await?;

        Ok(entity.map(HelpOrder::from_entity))
    }

    /// Creates an unanswered help order for the student.
    ///
    /// # Returns
    /// - `Ok(HelpOrder)` - The created order with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, student_id: i32, question: String) -> Result<HelpOrder, DbErr> {
        let entity = entity::prelude::HelpOrder::insert(entity::help_order::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            question: ActiveValue::Set(question),
            answer: ActiveValue::Set(None),
            answer_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(HelpOrder::from_entity(entity))
    }

    /// Writes the answer and answer timestamp on an order.
    ///
    /// # Returns
    /// - `Ok(Some(HelpOrder))` - The answered order
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn answer(
        &self,
        id: i32,
        answer: String,
        answer_at: DateTime<Utc>,
    ) -> Result<Option<HelpOrder>, DbErr> {
        let Some(existing) = entity::prelude::HelpOrder::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let entity = entity::prelude::HelpOrder::update(entity::help_order::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            student_id: ActiveValue::Unchanged(existing.student_id),
            question: ActiveValue::Unchanged(existing.question),
            answer: ActiveValue::Set(Some(answer)),
            answer_at: ActiveValue::Set(Some(answer_at)),
            created_at: ActiveValue::Unchanged(existing.created_at),
        })
        .exec(self.db)
        .await?;

        Ok(Some(HelpOrder::from_entity(entity)))
    }

    /// Deletes a help order by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - No order with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::HelpOrder::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
