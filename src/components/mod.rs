//! UI Components
//!
//! Reusable Leptos components.

mod board_list;
mod column_container;
mod delete_confirm_button;
mod kanban_board;
mod task_card;

pub use board_list::BoardList;
pub use column_container::ColumnContainer;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_board::{BoardHandle, KanbanBoard};
pub use task_card::TaskCard;
