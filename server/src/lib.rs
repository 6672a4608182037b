//! Famhub Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - routes: axum HTTP handlers

pub mod domain;
pub mod repository;
pub mod routes;

use repository::SqliteTaskStore;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub tasks: SqliteTaskStore,
}
