//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and return domain models. They are
//! generic over `ConnectionTrait`, so the same repository runs against the connection
//! pool for reads and against an open `DatabaseTransaction` for mutations.

pub mod category;
pub mod question;

#[cfg(test)]
mod test;
