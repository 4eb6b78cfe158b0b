//! Board Entities
//!
//! Columns, tasks and the snapshot pair that is handed to persistence.

use serde::{Deserialize, Serialize};

use crate::error::{KanbanError, Result};
use crate::id::Id;

/// A named lane; list position is its display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

impl Column {
    pub fn new(id: Id, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// A work item owned by exactly one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,
    pub column_id: Id,
    pub content: String,
}

impl Task {
    pub fn new(id: Id, column_id: Id, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }
}

/// Full board state as persisted: `{"cols": [...], "tasks": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "cols", default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Snapshot {
    pub fn new(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self { columns, tasks }
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(KanbanError::InvalidBoardData)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(KanbanError::Encode)
    }

    /// Every id in use, columns first
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.columns
            .iter()
            .map(|c| c.id)
            .chain(self.tasks.iter().map(|t| t.id))
    }
}
