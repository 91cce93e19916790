use sea_orm_migration::prelude::*;

use super::m20251018_000001_create_category_table::Category;

/// Categories available to the quiz client, inserted in id order.
const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Category::Table).columns([Category::Type]);

        for name in CATEGORIES {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete().from_table(Category::Table).to_owned();

        manager.exec_stmt(delete).await
    }
}
