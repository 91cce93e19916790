//! Category domain model.

use crate::server::model::question::Question;

/// A named grouping of questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    /// Display name shown by the client, e.g. "Science".
    pub kind: String,
}

impl Category {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
        }
    }
}

/// Projects categories to their display names, keeping their order.
pub fn category_names(categories: Vec<Category>) -> Vec<String> {
    categories.into_iter().map(|c| c.kind).collect()
}

/// One page of a category's questions together with the full category list.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuestions {
    pub category: Category,
    pub questions: Vec<Question>,
    /// Number of questions in the category before pagination.
    pub total: u64,
    pub categories: Vec<Category>,
}

impl CategoryQuestions {
    pub fn into_dto(self) -> crate::model::category::CategoryQuestionsDto {
        crate::model::category::CategoryQuestionsDto {
            success: true,
            questions: self.questions.into_iter().map(Question::into_dto).collect(),
            total_questions: self.total,
            categories: category_names(self.categories),
            current_category: self.category.kind,
            status: 200,
        }
    }
}
