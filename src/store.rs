//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the board
//! index and which board is open; the open board's own state lives in the
//! board view's engine.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BoardSummary, Id};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every board in the index, oldest first
    pub boards: Vec<BoardSummary>,
    /// Board shown in the board view (None = board list)
    pub current_board: Option<Id>,
}

impl AppState {
    pub fn new(boards: Vec<BoardSummary>) -> Self {
        Self {
            boards,
            current_board: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_boards(store: &AppStore) -> Vec<BoardSummary> {
    store.boards().get()
}

pub fn store_current_board(store: &AppStore) -> Option<Id> {
    store.current_board().get()
}

pub fn store_add_board(store: &AppStore, board: BoardSummary) {
    store.boards().write().push(board);
}

/// Remove a board from the index, closing it if it is open
pub fn store_remove_board(store: &AppStore, board_id: Id) {
    store.boards().write().retain(|board| board.id != board_id);
    if store.current_board().get_untracked() == Some(board_id) {
        *store.current_board().write() = None;
    }
}

pub fn store_open_board(store: &AppStore, board_id: Id) {
    *store.current_board().write() = Some(board_id);
}

pub fn store_close_board(store: &AppStore) {
    *store.current_board().write() = None;
}

/// Name of a board in the index
pub fn store_board_name(store: &AppStore, board_id: Id) -> Option<String> {
    store
        .boards()
        .read()
        .iter()
        .find(|board| board.id == board_id)
        .map(|board| board.name.clone())
}
