//! Task list model.
//!
//! # Invariants
//! - New tasks start not done.

use crate::model::Titled;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for tasks.
pub type TaskId = Uuid;

/// Single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub is_done: bool,
}

/// Validation error for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be blank"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates a new open task with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a task with a caller-provided stable ID.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_done: false,
        }
    }

    /// Checks title constraints.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl Titled for Task {
    fn title(&self) -> &str {
        &self.title
    }
}
