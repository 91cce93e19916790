//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let question = factory::create_question(&db, category.id).await?;
//!
//! let (category, questions) = factory::helpers::create_category_with_questions(&db, 12).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let question = factory::question::QuestionFactory::new(&db, category.id)
//!     .question("Who painted the Mona Lisa?")
//!     .answer("Leonardo da Vinci")
//!     .difficulty(2)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod question;

pub use category::create_category;
pub use question::create_question;
