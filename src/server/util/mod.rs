//! Request-independent helpers used by the service and controller layers.

pub mod extract;
pub mod pagination;
pub mod quiz;
