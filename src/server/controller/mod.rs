//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call the matching service and convert
//! the resulting domain model into a response DTO.

pub mod category;
pub mod fallback;
pub mod question;
pub mod quiz;

#[cfg(test)]
mod test;
