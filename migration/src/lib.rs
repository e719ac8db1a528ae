pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_gym_table;
mod m20250801_000002_create_user_table;
mod m20250801_000003_create_student_table;
mod m20250801_000004_create_plan_table;
mod m20250802_000005_create_enrollment_table;
mod m20250802_000006_create_check_in_table;
mod m20250802_000007_create_help_order_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_gym_table::Migration),
            Box::new(m20250801_000002_create_user_table::Migration),
            Box::new(m20250801_000003_create_student_table::Migration),
            Box::new(m20250801_000004_create_plan_table::Migration),
            Box::new(m20250802_000005_create_enrollment_table::Migration),
            Box::new(m20250802_000006_create_check_in_table::Migration),
            Box::new(m20250802_000007_create_help_order_table::Migration),
        ]
    }
}
