//! Trivia Test Utils
//!
//! Shared testing utilities for the trivia backend. Tests build an in-memory SQLite
//! database through `TestBuilder`, then populate it with fixtures and factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, nothing is inserted
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_questions() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let category = factory::create_category(db).await?;
//!     factory::create_question(db, category.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
