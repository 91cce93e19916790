use sea_orm_migration::{prelude::*, schema::*};

use super::m20251018_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(pk_auto(Question::Id))
                    .col(string(Question::Question))
                    .col(string(Question::Answer))
                    .col(integer(Question::Category))
                    .col(integer(Question::Difficulty))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_category")
                            .from(Question::Table, Question::Category)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Question {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}
