//! Drag Session Controller
//!
//! Interprets the three pointer-drag phases against a board:
//!
//! - tasks reorder live on every `Over`, since crossing a column changes grouping
//! - columns only reorder once, on `End`
//! - `End` always returns the session to idle

use tracing::{debug, trace};

use crate::board::Board;
use crate::id::Id;
use crate::model::{Column, Task};
use crate::reorder::OverTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    Column,
    Task,
}

/// Lightweight handle to a draggable entity, carried by the pointer layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragRef {
    pub kind: DragKind,
    pub id: Id,
}

impl DragRef {
    pub fn column(id: Id) -> Self {
        Self {
            kind: DragKind::Column,
            id,
        }
    }

    pub fn task(id: Id) -> Self {
        Self {
            kind: DragKind::Task,
            id,
        }
    }
}

/// Entity payload of a drag event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    Column(Column),
    Task(Task),
}

impl DragItem {
    pub fn id(&self) -> Id {
        match self {
            DragItem::Column(column) => column.id,
            DragItem::Task(task) => task.id,
        }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            DragItem::Column(_) => DragKind::Column,
            DragItem::Task(_) => DragKind::Task,
        }
    }

    pub fn drag_ref(&self) -> DragRef {
        DragRef {
            kind: self.kind(),
            id: self.id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { active: DragItem },
    Over { active: DragItem, over: Option<DragItem> },
    End { active: DragItem, over: Option<DragItem> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: DragSession,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_idle(&self) -> bool {
        self.session == DragSession::Idle
    }

    pub fn active_column(&self) -> Option<&Column> {
        match &self.session {
            DragSession::DraggingColumn(column) => Some(column),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match &self.session {
            DragSession::DraggingTask(task) => Some(task),
            _ => None,
        }
    }

    /// Whether `id` is the entity currently being dragged
    pub fn is_dragging(&self, id: Id) -> bool {
        match &self.session {
            DragSession::Idle => false,
            DragSession::DraggingColumn(column) => column.id == id,
            DragSession::DraggingTask(task) => task.id == id,
        }
    }

    pub fn handle(&mut self, board: &mut Board, event: DragEvent) {
        match event {
            DragEvent::Start { active } => self.on_drag_start(active),
            DragEvent::Over { active, over } => self.on_drag_over(board, &active, over.as_ref()),
            DragEvent::End { active, over } => self.on_drag_end(board, &active, over.as_ref()),
        }
    }

    pub fn on_drag_start(&mut self, active: DragItem) {
        debug!(kind = ?active.kind(), id = %active.id(), "drag start");
        self.session = match active {
            DragItem::Column(column) => DragSession::DraggingColumn(column),
            DragItem::Task(task) => DragSession::DraggingTask(task),
        };
    }

    /// Live reorder while a task moves across tasks and columns
    pub fn on_drag_over(&mut self, board: &mut Board, active: &DragItem, over: Option<&DragItem>) {
        let Some(over) = over else {
            return;
        };
        if active.id() == over.id() {
            return;
        }
        let DragItem::Task(task) = active else {
            return;
        };

        let target = match over {
            DragItem::Task(target) => OverTarget::Task(target.id),
            DragItem::Column(target) => OverTarget::Column(target.id),
        };
        trace!(task = %task.id, ?target, "drag over");
        board.move_task(task.id, target);
    }

    /// Finish the gesture; columns are reordered here and only here
    pub fn on_drag_end(&mut self, board: &mut Board, active: &DragItem, over: Option<&DragItem>) {
        self.reset();

        let Some(over) = over else {
            debug!(id = %active.id(), "drag ended outside any target");
            return;
        };
        if active.id() == over.id() {
            return;
        }
        let DragItem::Column(column) = active else {
            return;
        };

        // A column released over a task lands on the task's column
        let target_column = match over {
            DragItem::Column(target) => target.id,
            DragItem::Task(target) => match board.task(target.id) {
                Some(task) => task.column_id,
                None => target.column_id,
            },
        };
        if target_column == column.id {
            return;
        }

        let (Some(from), Some(to)) = (board.column_index(column.id), board.column_index(target_column)) else {
            debug!(column = %column.id, target = %target_column, "column drop target no longer exists");
            return;
        };
        debug!(column = %column.id, from, to, "drop column");
        board.reorder_columns(from, to);
    }

    /// Return to idle without touching the board
    pub fn reset(&mut self) {
        self.session = DragSession::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NullSink;
    use crate::config::KanbanConfig;
    use crate::model::Snapshot;

    fn board() -> Board {
        Board::new(
            Snapshot::new(
                vec![
                    Column::new(Id::new(1), "Column 1"),
                    Column::new(Id::new(2), "Column 2"),
                    Column::new(Id::new(3), "Column 3"),
                ],
                vec![
                    Task::new(Id::new(10), Id::new(1), "Task 1"),
                    Task::new(Id::new(11), Id::new(1), "Task 2"),
                    Task::new(Id::new(12), Id::new(3), "Task 3"),
                ],
            ),
            NullSink,
            KanbanConfig::default(),
        )
    }

    fn column_item(board: &Board, id: u64) -> DragItem {
        board.drag_item(DragRef::column(Id::new(id))).unwrap()
    }

    fn task_item(board: &Board, id: u64) -> DragItem {
        board.drag_item(DragRef::task(Id::new(id))).unwrap()
    }

    fn column_order(board: &Board) -> Vec<u64> {
        board.columns().iter().map(|c| c.id.get()).collect()
    }

    #[test]
    fn test_drag_start_classifies_entity() {
        let board = board();
        let mut drag = DragController::new();

        drag.on_drag_start(task_item(&board, 10));
        assert_eq!(drag.active_task().map(|t| t.id), Some(Id::new(10)));
        assert!(drag.active_column().is_none());

        drag.on_drag_start(column_item(&board, 2));
        assert_eq!(drag.active_column().map(|c| c.id), Some(Id::new(2)));
        assert!(drag.is_dragging(Id::new(2)));
    }

    #[test]
    fn test_task_over_task_reorders_live_without_ending_session() {
        let mut board = board();
        let mut drag = DragController::new();
        let active = task_item(&board, 11);
        let over = task_item(&board, 10);

        drag.handle(&mut board, DragEvent::Start { active: active.clone() });
        drag.handle(&mut board, DragEvent::Over { active, over: Some(over) });

        let order: Vec<u64> = board.tasks().iter().map(|t| t.id.get()).collect();
        assert_eq!(order, vec![11, 10, 12]);
        assert!(drag.active_task().is_some());
    }

    #[test]
    fn test_task_over_column_reparents() {
        let mut board = board();
        let mut drag = DragController::new();
        let active = task_item(&board, 10);
        let over = column_item(&board, 2);

        drag.on_drag_start(active.clone());
        drag.on_drag_over(&mut board, &active, Some(&over));

        assert_eq!(board.task(Id::new(10)).unwrap().column_id, Id::new(2));
    }

    #[test]
    fn test_column_over_does_nothing_until_drop() {
        let mut board = board();
        let mut drag = DragController::new();
        let active = column_item(&board, 1);
        let over = column_item(&board, 3);

        drag.on_drag_start(active.clone());
        drag.on_drag_over(&mut board, &active, Some(&over));
        assert_eq!(column_order(&board), vec![1, 2, 3]);

        drag.on_drag_end(&mut board, &active, Some(&over));
        assert_eq!(column_order(&board), vec![2, 3, 1]);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_column_dropped_over_task_uses_task_column() {
        let mut board = board();
        let mut drag = DragController::new();
        let active = column_item(&board, 1);
        let over = task_item(&board, 12);

        drag.on_drag_start(active.clone());
        drag.on_drag_end(&mut board, &active, Some(&over));

        assert_eq!(column_order(&board), vec![2, 3, 1]);
    }

    #[test]
    fn test_drop_outside_targets_only_resets() {
        let mut board = board();
        let mut drag = DragController::new();
        let active = column_item(&board, 1);
        let before = board.snapshot();

        drag.on_drag_start(active.clone());
        drag.handle(&mut board, DragEvent::End { active, over: None });

        assert!(drag.is_idle());
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_drop_on_self_is_a_no_op() {
        let mut board = board();
        let mut drag = DragController::new();
        let active = column_item(&board, 2);
        let before = board.snapshot();

        drag.on_drag_start(active.clone());
        drag.on_drag_end(&mut board, &active, Some(&active));

        assert!(drag.is_idle());
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_task_drop_does_not_reorder_columns() {
        let mut board = board();
        let mut drag = DragController::new();
        let active = task_item(&board, 10);
        let over = column_item(&board, 3);

        drag.on_drag_start(active.clone());
        drag.on_drag_end(&mut board, &active, Some(&over));

        assert!(drag.is_idle());
        assert_eq!(column_order(&board), vec![1, 2, 3]);
        assert_eq!(board.task(Id::new(10)).unwrap().column_id, Id::new(1));
    }
}
