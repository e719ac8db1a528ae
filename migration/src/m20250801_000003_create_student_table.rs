use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000001_create_gym_table::Gym;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::Name))
                    .col(string_uniq(Student::Email))
                    .col(integer(Student::Age))
                    .col(double(Student::Weight))
                    .col(string(Student::Height))
                    .col(integer(Student::GymId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_gym_id")
                            .from(Student::Table, Student::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    Name,
    Email,
    Age,
    Weight,
    Height,
    GymId,
}
