//! Error types for board data decoding and encoding.
//!
//! Board mutations are total and never fail; only the boundary where
//! persisted blobs and configuration enter or leave the engine can error.

use thiserror::Error;

/// Common result type for kanban-core operations
pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    /// A persisted board blob could not be decoded
    #[error("invalid board data: {0}")]
    InvalidBoardData(#[source] serde_json::Error),

    /// A snapshot could not be encoded
    #[error("failed to encode board data: {0}")]
    Encode(#[source] serde_json::Error),

    /// Engine configuration could not be decoded
    #[error("invalid kanban config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
