//! Repository Layer - Core Trait
//!
//! Defines the abstract interface for the partitioned task table.
//! The family code is the partition key, the task id the row key.

use async_trait::async_trait;

use crate::domain::{DomainResult, Task};

/// Partitioned task store
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks in one family partition
    async fn list_by_family(&self, family_code: &str) -> DomainResult<Vec<Task>>;

    /// Inserts a new row; a duplicate (family code, task id) pair is a conflict
    async fn insert(&self, task: &Task) -> DomainResult<()>;

    /// Unconditional overwrite; creates the row when it does not exist yet
    async fn replace(&self, task: &Task) -> DomainResult<()>;

    /// Removes a row; removing an absent row is not an error
    async fn delete(&self, family_code: &str, id: &str) -> DomainResult<()>;
}
