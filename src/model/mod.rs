//! Request and response payloads exchanged with the quiz client.

pub mod api;
pub mod category;
pub mod question;
pub mod quiz;
