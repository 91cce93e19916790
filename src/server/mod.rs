//! Trivia API backend.
//!
//! Serves a question bank grouped into categories and a quiz endpoint that draws
//! random unseen questions. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and listener setup
//! - **Router** (`router`) - Route table, CORS headers and API documentation
//! - **Utilities** (`util/`) - Extractors, pagination and quiz question selection
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts input, converts DTOs to params, calls service
//! 3. **Service** applies business rules, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response
//!
//! Any failure along the way becomes an [`error::AppError`], rendered as
//! `{"success": false, "message": ...}` with the matching status code.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
