//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a gym with an enrolled student and the plan backing the enrollment.
///
/// This is a convenience method that creates:
/// 1. Gym
/// 2. Student (belonging to the gym)
/// 3. Plan
/// 4. Enrollment linking the student to the plan
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((gym, student, plan, enrollment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrolled_student(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::gym::Model,
        entity::student::Model,
        entity::plan::Model,
        entity::enrollment::Model,
    ),
    DbErr,
> {
    let gym = crate::factory::gym::create_gym(db).await?;
    let student = crate::factory::student::create_student(db, gym.id).await?;
    let plan = crate::factory::plan::create_plan(db).await?;
    let enrollment = crate::factory::enrollment::create_enrollment(db, student.id, plan.id).await?;

    Ok((gym, student, plan, enrollment))
}
