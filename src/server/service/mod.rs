//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They implement the
//! listing, validation and selection rules and own transaction boundaries: every
//! mutation runs in a `DatabaseTransaction` that is committed on success and rolled back
//! when dropped on any early return.

pub mod category;
pub mod question;
pub mod quiz;

#[cfg(test)]
mod test;
