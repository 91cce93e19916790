use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::category::Category;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by id
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Gets a category by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }
}
