//! Task model definitions

use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Format of the persisted `created_at` field. Other components may read the
/// stored file directly, so this string layout is part of the contract.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Status of a task in the list
///
/// Serialized verbatim as `"Pending"` / `"Completed"`; the literal strings
/// are part of the persisted contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TaskStatus {
    /// The flipped status. Toggling is its own inverse.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Filter selector for the visible task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Whether a task with the given status is visible under this filter.
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::Completed => status == TaskStatus::Completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub status: TaskStatus,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Create a task record with the given id and text.
    ///
    /// New tasks start as `Pending` with `created_at` set to the current
    /// local time. Id allocation is the store's job, not this constructor's.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        // Truncate to whole seconds so the in-memory value matches what the
        // persisted format can represent.
        let now = Local::now().naive_local();
        let created_at = now.with_nanosecond(0).unwrap_or(now);
        Self {
            id,
            text: text.into(),
            status: TaskStatus::default(),
            created_at,
        }
    }
}

/// Serde adapter persisting timestamps as `YYYY-MM-DD HH:MM:SS`.
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new(1, "Buy milk");
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
        assert_eq!(TaskStatus::Pending.toggled().toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(TaskStatus::Pending));
        assert!(StatusFilter::All.matches(TaskStatus::Completed));
        assert!(StatusFilter::Pending.matches(TaskStatus::Pending));
        assert!(!StatusFilter::Pending.matches(TaskStatus::Completed));
        assert!(StatusFilter::Completed.matches(TaskStatus::Completed));
        assert!(!StatusFilter::Completed.matches(TaskStatus::Pending));
    }

    #[test]
    fn test_status_serializes_as_literal_string() {
        let pending = serde_json::to_string(&TaskStatus::Pending).unwrap();
        assert_eq!(pending, "\"Pending\"");
        let completed = serde_json::to_string(&TaskStatus::Completed).unwrap();
        assert_eq!(completed, "\"Completed\"");
    }

    #[test]
    fn test_persisted_timestamp_format() {
        let task = Task::new(1, "Buy milk");
        let value = serde_json::to_value(&task).unwrap();
        let stored = value["created_at"].as_str().unwrap();
        let parsed = NaiveDateTime::parse_from_str(stored, TIMESTAMP_FORMAT).unwrap();
        assert_eq!(parsed, task.created_at);
    }

    #[test]
    fn test_task_round_trip() {
        let task = Task::new(7, "Water the plants");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.text, task.text);
        assert_eq!(back.status, task.status);
        assert_eq!(back.created_at, task.created_at);
    }
}
