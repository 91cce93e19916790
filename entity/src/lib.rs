//! SeaORM entities for the trivia store.

pub mod prelude;

pub mod category;
pub mod question;
