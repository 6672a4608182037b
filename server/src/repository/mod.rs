//! Repository Layer
//!
//! Storage abstraction and the SQLite-backed implementation.

mod db;
mod task_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{open, open_in_memory};
pub use task_repo::SqliteTaskStore;
pub use traits::TaskStore;
