//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category display name.
pub const DEFAULT_KIND: &str = "Science";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - kind: `"Science"`
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        kind: DEFAULT_KIND.to_string(),
    }
}

/// Creates a category entity builder for customizing fixture values.
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder { entity: entity() }
}

/// Builder for category entity fixtures.
pub struct CategoryEntityBuilder {
    entity: category::Model,
}

impl CategoryEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.entity.kind = kind.into();
        self
    }

    pub fn build(self) -> category::Model {
        self.entity
    }
}
