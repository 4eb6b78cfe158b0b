//! Board State Store
//!
//! Owns the ordered column and task sequences. Every mutation that changes
//! state ends in a commit that hands the full snapshot to the sink.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::KanbanConfig;
use crate::drag::{DragItem, DragKind, DragRef};
use crate::id::{Id, IdGenerator};
use crate::model::{Column, Snapshot, Task};
use crate::reorder::{reorder_columns, reorder_tasks, OverTarget};

/// Receives the complete board after every committed change.
///
/// Delivery is best effort: the store never waits on, retries or rolls back
/// because of what the sink does with a snapshot.
pub trait SnapshotSink: Send + Sync {
    fn publish(&self, snapshot: &Snapshot);
}

impl<F> SnapshotSink for F
where
    F: Fn(&Snapshot) + Send + Sync,
{
    fn publish(&self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Sink that drops every snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn publish(&self, _snapshot: &Snapshot) {}
}

pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    ids: IdGenerator,
    config: KanbanConfig,
    sink: Box<dyn SnapshotSink>,
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("columns", &self.columns)
            .field("tasks", &self.tasks)
            .field("ids", &self.ids)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Board {
    /// Seed a board from a persisted snapshot. Nothing is published until the
    /// first mutation.
    pub fn new(snapshot: Snapshot, sink: impl SnapshotSink + 'static, config: KanbanConfig) -> Self {
        let ids = IdGenerator::after(snapshot.ids());
        Self {
            columns: snapshot.columns,
            tasks: snapshot.tasks,
            ids,
            config,
            sink: Box::new(sink),
        }
    }

    pub fn config(&self) -> &KanbanConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks of one column in board order
    pub fn tasks_in(&self, column_id: Id) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn column_index(&self, id: Id) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.columns.clone(), self.tasks.clone())
    }

    /// Current payload for a drag reference, if the entity still exists
    pub fn drag_item(&self, drag_ref: DragRef) -> Option<DragItem> {
        match drag_ref.kind {
            DragKind::Column => self.column(drag_ref.id).cloned().map(DragItem::Column),
            DragKind::Task => self.task(drag_ref.id).cloned().map(DragItem::Task),
        }
    }

    /// Append a column titled `Column {n}`; `None` once ids run out
    pub fn create_column(&mut self) -> Option<Id> {
        let Some(id) = self.ids.next_id() else {
            warn!("id space exhausted, column not created");
            return None;
        };
        let title = format!("Column {}", self.columns.len() + 1);
        debug!(%id, %title, "create column");
        self.columns.push(Column::new(id, title));
        self.commit();
        Some(id)
    }

    /// Remove a column and every task that belongs to it
    pub fn delete_column(&mut self, id: Id) -> bool {
        let columns_before = self.columns.len();
        let tasks_before = self.tasks.len();
        self.columns.retain(|c| c.id != id);
        self.tasks.retain(|t| t.column_id != id);

        let removed_tasks = tasks_before - self.tasks.len();
        let changed = columns_before != self.columns.len() || removed_tasks > 0;
        if changed {
            debug!(%id, removed_tasks, "delete column");
            self.commit();
        }
        changed
    }

    pub fn rename_column(&mut self, id: Id, title: impl Into<String>) -> bool {
        let title = title.into();
        let Some(column) = self.columns.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if column.title == title {
            return false;
        }
        debug!(%id, %title, "rename column");
        column.title = title;
        self.commit();
        true
    }

    /// Append a task titled `Task {n}` to `column_id`.
    ///
    /// The column is not checked; callers only offer this on live columns.
    pub fn create_task(&mut self, column_id: Id) -> Option<Id> {
        let Some(id) = self.ids.next_id() else {
            warn!(column = %column_id, "id space exhausted, task not created");
            return None;
        };
        let content = format!("Task {}", self.tasks.len() + 1);
        debug!(%id, column = %column_id, "create task");
        self.tasks.push(Task::new(id, column_id, content));
        self.commit();
        Some(id)
    }

    pub fn delete_task(&mut self, id: Id) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let changed = before != self.tasks.len();
        if changed {
            debug!(%id, "delete task");
            self.commit();
        }
        changed
    }

    pub fn update_task_content(&mut self, id: Id, content: impl Into<String>) -> bool {
        let content = content.into();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if task.content == content {
            return false;
        }
        debug!(%id, "update task content");
        task.content = content;
        self.commit();
        true
    }

    pub fn reorder_columns(&mut self, from: usize, to: usize) -> bool {
        let next = reorder_columns(&self.columns, from, to);
        self.replace_columns(next)
    }

    /// Reorder/reparent a task against what it is dragged over
    pub fn move_task(&mut self, active: Id, over: OverTarget) -> bool {
        let next = reorder_tasks(&self.tasks, active, over, self.config.cross_column_placement);
        if next == self.tasks {
            return false;
        }
        trace!(%active, ?over, "move task");
        self.tasks = next;
        self.commit();
        true
    }

    fn replace_columns(&mut self, next: Vec<Column>) -> bool {
        if next == self.columns {
            return false;
        }
        debug!("reorder columns");
        self.columns = next;
        self.commit();
        true
    }

    fn commit(&mut self) {
        let snapshot = self.snapshot();
        self.sink.publish(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    fn recording_board(snapshot: Snapshot) -> (Board, Arc<Mutex<Vec<Snapshot>>>) {
        let published = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let published = Arc::clone(&published);
            move |snapshot: &Snapshot| published.lock().unwrap().push(snapshot.clone())
        };
        (Board::new(snapshot, sink, KanbanConfig::default()), published)
    }

    fn two_column_board() -> Snapshot {
        Snapshot::new(
            vec![Column::new(Id::new(1), "Column 1"), Column::new(Id::new(2), "Column 2")],
            vec![
                Task::new(Id::new(10), Id::new(1), "Task 1"),
                Task::new(Id::new(11), Id::new(2), "Task 2"),
                Task::new(Id::new(12), Id::new(1), "Task 3"),
            ],
        )
    }

    #[test]
    fn test_create_column_title_counts_existing_columns() {
        let (mut board, published) = recording_board(two_column_board());
        let id = board.create_column().unwrap();

        let column = board.column(id).unwrap();
        assert_eq!(column.title, "Column 3");
        assert_eq!(board.columns().last().unwrap().id, id);
        assert_eq!(published.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_new_ids_never_collide_with_loaded_ones() {
        let (mut board, _) = recording_board(two_column_board());
        let column = board.create_column().unwrap();
        let task = board.create_task(column).unwrap();

        assert!(column.get() > 12);
        assert!(task.get() > column.get());
    }

    #[test]
    fn test_exhausted_ids_create_nothing() {
        let snapshot = Snapshot::new(vec![Column::new(Id::new(u64::MAX), "Full")], Vec::new());
        let (mut board, published) = recording_board(snapshot);

        assert_eq!(board.create_column(), None);
        assert_eq!(board.create_task(Id::new(u64::MAX)), None);
        assert_eq!(board.columns().len(), 1);
        assert!(board.tasks().is_empty());
        assert!(published.lock().unwrap().is_empty());
    }

    #[test]
    fn test_create_task_content_counts_all_tasks() {
        let (mut board, _) = recording_board(two_column_board());
        let id = board.create_task(Id::new(2)).unwrap();

        let task = board.task(id).unwrap();
        assert_eq!(task.content, "Task 4");
        assert_eq!(task.column_id, Id::new(2));
    }

    #[test]
    fn test_delete_column_cascades_to_its_tasks() {
        let (mut board, published) = recording_board(two_column_board());
        assert!(board.delete_column(Id::new(1)));

        assert_eq!(board.columns().len(), 1);
        let remaining: Vec<u64> = board.tasks().iter().map(|t| t.id.get()).collect();
        assert_eq!(remaining, vec![11]);

        let last = published.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last, board.snapshot());
    }

    #[test]
    fn test_unknown_ids_are_silent_no_ops() {
        let (mut board, published) = recording_board(two_column_board());
        let before = board.snapshot();

        assert!(!board.delete_column(Id::new(99)));
        assert!(!board.rename_column(Id::new(99), "Nope"));
        assert!(!board.delete_task(Id::new(99)));
        assert!(!board.update_task_content(Id::new(99), "Nope"));

        assert_eq!(board.snapshot(), before);
        assert!(published.lock().unwrap().is_empty());
    }

    #[test]
    fn test_rename_and_edit_in_place() {
        let (mut board, published) = recording_board(two_column_board());
        assert!(board.rename_column(Id::new(2), "Done"));
        assert!(board.update_task_content(Id::new(11), "Ship it"));

        assert_eq!(board.column(Id::new(2)).unwrap().title, "Done");
        assert_eq!(board.task(Id::new(11)).unwrap().content, "Ship it");
        assert_eq!(board.column_index(Id::new(2)), Some(1));
        assert_eq!(published.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_tasks_in_keeps_board_order() {
        let (board, _) = recording_board(two_column_board());
        let column_one: Vec<u64> = board.tasks_in(Id::new(1)).map(|t| t.id.get()).collect();
        assert_eq!(column_one, vec![10, 12]);
    }

    #[test]
    fn test_move_task_to_own_slot_publishes_nothing() {
        let (mut board, published) = recording_board(two_column_board());
        assert!(!board.move_task(Id::new(10), OverTarget::Task(Id::new(10))));
        assert!(published.lock().unwrap().is_empty());
    }

    #[test]
    fn test_move_task_across_columns_commits() {
        let (mut board, published) = recording_board(two_column_board());
        assert!(board.move_task(Id::new(12), OverTarget::Column(Id::new(2))));

        assert_eq!(board.task(Id::new(12)).unwrap().column_id, Id::new(2));
        assert_eq!(published.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_drag_item_resolves_current_payload() {
        let (mut board, _) = recording_board(two_column_board());
        board.rename_column(Id::new(1), "Backlog");

        let item = board.drag_item(DragRef::column(Id::new(1))).unwrap();
        assert_eq!(item, DragItem::Column(Column::new(Id::new(1), "Backlog")));
        assert!(board.drag_item(DragRef::task(Id::new(1))).is_none());
    }

    proptest! {
        #[test]
        fn column_delete_keeps_other_tasks_in_order(
            columns in proptest::collection::vec(1u64..5, 0..16),
            victim in 1u64..5,
        ) {
            let tasks: Vec<Task> = columns
                .iter()
                .enumerate()
                .map(|(i, c)| Task::new(Id::new(100 + i as u64), Id::new(*c), "t"))
                .collect();
            let cols = (1..5).map(|i| Column::new(Id::new(i), "c")).collect();
            let (mut board, _) = recording_board(Snapshot::new(cols, tasks.clone()));

            board.delete_column(Id::new(victim));

            prop_assert!(board.column(Id::new(victim)).is_none());
            let expected: Vec<Task> = tasks.into_iter().filter(|t| t.column_id != Id::new(victim)).collect();
            prop_assert_eq!(board.tasks(), expected.as_slice());
        }
    }
}
