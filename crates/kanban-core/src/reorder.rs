//! Reorder/Reparent Algorithm
//!
//! Pure transforms over the ordered sequences. Each function copies its input,
//! mutates the copy and returns it; nothing here touches the store.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::id::Id;
use crate::model::{Column, Task};

/// Where a task dragged over a task in another column is inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrossColumnPlacement {
    /// One slot before the target's index, as boards saved so far were ordered.
    /// A target at index 0 wraps the destination to the end of the list.
    #[default]
    BeforeTarget,
    /// Exactly at the target's index
    AtTarget,
}

/// What the dragged task is currently over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverTarget {
    Task(Id),
    Column(Id),
}

/// Remove the element at `from` and insert it at `to`, shifting the rest.
///
/// An out-of-range `from` leaves the list untouched; `to` clamps to the end.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Move column `from` to index `to`
pub fn reorder_columns(columns: &[Column], from: usize, to: usize) -> Vec<Column> {
    let mut next = columns.to_vec();
    array_move(&mut next, from, to);
    next
}

/// Reorder and, when the target lives elsewhere, reparent the task `active`.
///
/// - over a task in the same column: move to the target's index
/// - over a task in another column: take the target's column, then insert per `placement`
/// - over a column: take that column, keep the list position
///
/// Ids that are not in `tasks` leave the sequence unchanged.
pub fn reorder_tasks(
    tasks: &[Task],
    active: Id,
    over: OverTarget,
    placement: CrossColumnPlacement,
) -> Vec<Task> {
    let mut next = tasks.to_vec();
    let Some(active_index) = index_of(&next, active) else {
        warn!(%active, "reorder requested for unknown task");
        return next;
    };

    match over {
        OverTarget::Task(over_id) => {
            let Some(over_index) = index_of(&next, over_id) else {
                warn!(%active, over = %over_id, "reorder target task not found");
                return next;
            };

            let target_column = next[over_index].column_id;
            if next[active_index].column_id != target_column {
                next[active_index].column_id = target_column;
                let to = match placement {
                    CrossColumnPlacement::BeforeTarget => {
                        over_index.checked_sub(1).unwrap_or(next.len() - 1)
                    }
                    CrossColumnPlacement::AtTarget => over_index,
                };
                array_move(&mut next, active_index, to);
            } else {
                array_move(&mut next, active_index, over_index);
            }
        }
        OverTarget::Column(column_id) => {
            next[active_index].column_id = column_id;
        }
    }

    next
}

fn index_of(tasks: &[Task], id: Id) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}
