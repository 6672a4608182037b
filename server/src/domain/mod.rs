//! Domain Layer
//!
//! Contains the task entity, the closed assignee/category enumerations and
//! field validation. This layer has no dependencies on the HTTP or storage
//! layers.

mod entity;
mod task;

pub use entity::{DomainError, DomainResult};
pub use task::{parse_hour_minute, Assignee, Category, Task};
