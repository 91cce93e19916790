//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default values
//! used by the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let question = fixture::question::entity_builder()
//!     .question("What is the boiling point of water?")
//!     .difficulty(1)
//!     .build();
//! ```

pub mod category;
pub mod question;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use question::{entity as question_entity, entity_builder as question_entity_builder};
