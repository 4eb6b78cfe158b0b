//! Kanban Core
//!
//! The board engine behind the Kanban UI: two ordered collections (columns,
//! and a flat list of tasks tagged with their owning column) plus the logic
//! that turns pointer-drag phases into reorder/reparent mutations.
//!
//! - `model`: entities and the persisted snapshot format
//! - `id`: collection-unique identifier generation
//! - `reorder`: pure reorder/reparent transforms
//! - `board`: the authoritative store and its commit port
//! - `drag`: drag session state machine
//! - `engine`: one board plus one drag controller
//!
//! ```
//! use kanban_core::{Board, KanbanConfig, NullSink, Snapshot};
//!
//! let mut board = Board::new(Snapshot::default(), NullSink, KanbanConfig::default());
//! let todo = board.create_column().expect("fresh board has ids to spare");
//! board.create_task(todo);
//! assert_eq!(board.tasks_in(todo).count(), 1);
//! ```

mod board;
mod config;
mod drag;
mod engine;
mod error;
mod id;
mod model;
mod reorder;

pub use board::{Board, NullSink, SnapshotSink};
pub use config::KanbanConfig;
pub use drag::{DragController, DragEvent, DragItem, DragKind, DragRef, DragSession};
pub use engine::KanbanEngine;
pub use error::{KanbanError, Result};
pub use id::{Id, IdGenerator};
pub use model::{Column, Snapshot, Task};
pub use reorder::{array_move, reorder_columns, reorder_tasks, CrossColumnPlacement, OverTarget};
