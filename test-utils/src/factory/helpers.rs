//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category holding `count` questions with default values.
///
/// Questions are inserted in order, so their ids ascend with their position in the
/// returned vector.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of questions to create in the category
///
/// # Returns
/// - `Ok((category, questions))` - The created category and its questions
/// - `Err(DbErr)` - Database error during creation
pub async fn create_category_with_questions(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::category::Model, Vec<entity::question::Model>), DbErr> {
    let category = crate::factory::category::create_category(db).await?;

    let mut questions = Vec::with_capacity(count);
    for _ in 0..count {
        questions.push(crate::factory::question::create_question(db, category.id).await?);
    }

    Ok((category, questions))
}
