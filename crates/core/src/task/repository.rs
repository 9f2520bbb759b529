//! Task repository trait
//!
//! Defines the storage contract for task operations. Callers hold an
//! explicit store handle, so tests can run against isolated instances.

use async_trait::async_trait;

use super::model::{StatusFilter, Task};
use crate::Result;

/// Repository interface for task storage operations
///
/// Mutating operations targeting an id that does not exist are benign
/// no-ops and report `Ok(false)`; only storage failures surface as errors.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with the given text, starting as `Pending`.
    ///
    /// The text must already be trimmed and non-empty; validating user
    /// input is the caller's responsibility.
    async fn create(&self, text: String) -> Result<Task>;

    /// Get a task by id
    async fn get(&self, id: u64) -> Result<Option<Task>>;

    /// Get all tasks, newest first
    async fn list(&self) -> Result<Vec<Task>>;

    /// Get the tasks visible under the given filter, newest first
    async fn find_by_status(&self, filter: StatusFilter) -> Result<Vec<Task>>;

    /// Replace the text of an existing task
    async fn update_text(&self, id: u64, text: String) -> Result<bool>;

    /// Flip a task between `Pending` and `Completed`
    async fn toggle_status(&self, id: u64) -> Result<bool>;

    /// Permanently remove a task
    async fn delete(&self, id: u64) -> Result<bool>;
}
