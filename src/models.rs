//! Frontend Models
//!
//! Board entities come from `kanban-core`; this adds the board index entry.

use serde::{Deserialize, Serialize};

pub use kanban_core::{DragRef, Id, Snapshot};

/// One entry of the board index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}
