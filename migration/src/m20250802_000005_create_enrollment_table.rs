use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250801_000003_create_student_table::Student, m20250801_000004_create_plan_table::Plan,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    // No unique index on StudentId: single-enrollment is
                    // enforced by an existence query in the service layer.
                    .col(integer(Enrollment::StudentId))
                    .col(integer(Enrollment::PlanId))
                    .col(timestamp_with_time_zone(Enrollment::StartDate))
                    .col(timestamp_with_time_zone(Enrollment::EndDate))
                    .col(double(Enrollment::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student_id")
                            .from(Enrollment::Table, Enrollment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_plan_id")
                            .from(Enrollment::Table, Enrollment::PlanId)
                            .to(Plan::Table, Plan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    StudentId,
    PlanId,
    StartDate,
    EndDate,
    Price,
}
