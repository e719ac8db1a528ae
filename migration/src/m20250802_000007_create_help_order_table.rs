use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000003_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelpOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(HelpOrder::Id))
                    .col(integer(HelpOrder::StudentId))
                    .col(text(HelpOrder::Question))
                    .col(text_null(HelpOrder::Answer))
                    .col(timestamp_with_time_zone_null(HelpOrder::AnswerAt))
                    .col(
                        timestamp_with_time_zone(HelpOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_help_order_student_id")
                            .from(HelpOrder::Table, HelpOrder::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HelpOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HelpOrder {
    Table,
    Id,
    StudentId,
    Question,
    Answer,
    AnswerAt,
    CreatedAt,
}
