//! File-based task storage implementation
//!
//! Stores tasks as JSON in a file on disk. Every mutation is written
//! through before the operation returns, so a restarted process sees it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;

use super::model::{StatusFilter, Task};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// Persisted store layout: the task records plus the id counter.
///
/// The counter lives in the file so ids stay monotonic across restarts
/// even when the highest-numbered task has been deleted.
#[derive(Debug, Serialize, Deserialize)]
struct StoreState {
    next_id: u64,
    tasks: Vec<Task>,
}

impl StoreState {
    fn new() -> Self {
        Self {
            next_id: 1,
            tasks: Vec::new(),
        }
    }
}

/// File-based task store using JSON
#[derive(Debug)]
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the persisted state
    state: RwLock<StoreState>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let mut state: StoreState = serde_json::from_str(&content)
                .map_err(|e| Error::Storage(format!("Failed to parse task file: {}", e)))?;
            // Guard against a hand-edited counter falling behind the records.
            let max_id = state.tasks.iter().map(|t| t.id).max().unwrap_or(0);
            state.next_id = state.next_id.max(max_id + 1);
            tracing::debug!("Loaded {} tasks from {:?}", state.tasks.len(), path);
            state
        } else {
            StoreState::new()
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Persist the state to disk
    async fn persist(&self) -> Result<()> {
        let state = self.state.read().await;
        let content = serde_json::to_string_pretty(&*state)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

fn sort_newest_first(tasks: &mut [Task]) {
    // created_at has whole-second precision, so ties are broken by id to
    // keep the ordering stable across calls.
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, text: String) -> Result<Task> {
        let task = {
            let mut state = self.state.write().await;
            let task = Task::new(state.next_id, text);
            state.next_id += 1;
            state.tasks.push(task.clone());
            task
        };
        self.persist().await?;
        Ok(task)
    }

    async fn get(&self, id: u64) -> Result<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        let mut tasks = state.tasks.clone();
        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    async fn find_by_status(&self, filter: StatusFilter) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        let mut tasks: Vec<Task> = state
            .tasks
            .iter()
            .filter(|t| filter.matches(t.status))
            .cloned()
            .collect();
        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    async fn update_text(&self, id: u64, text: String) -> Result<bool> {
        let found = {
            let mut state = self.state.write().await;
            match state.tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.text = text;
                    true
                }
                None => false,
            }
        };
        if found {
            self.persist().await?;
        }
        Ok(found)
    }

    async fn toggle_status(&self, id: u64) -> Result<bool> {
        let found = {
            let mut state = self.state.write().await;
            match state.tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.status = task.status.toggled();
                    true
                }
                None => false,
            }
        };
        if found {
            self.persist().await?;
        }
        Ok(found)
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let removed = {
            let mut state = self.state.write().await;
            let before = state.tasks.len();
            state.tasks.retain(|t| t.id != id);
            state.tasks.len() != before
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }
}
