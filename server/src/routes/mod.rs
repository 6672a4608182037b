//! HTTP Layer
//!
//! axum handlers for the four task operations, plus the wire DTOs they
//! exchange with the browser.

mod task_routes;

pub use task_routes::{router, TaskBody};
