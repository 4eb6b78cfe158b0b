//! Board Persistence Bridge
//!
//! Stores the board index and one opaque JSON blob per board in the browser's
//! `localStorage`. The engine reaches this only through `LocalStorageSink`.

use kanban_core::{IdGenerator, KanbanConfig, Snapshot, SnapshotSink};
use leptos::task::spawn_local;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::models::{BoardSummary, Id};

const BOARD_INDEX_KEY: &str = "kanban:boards";
const CONFIG_KEY: &str = "kanban:config";

fn board_key(board_id: Id) -> String {
    format!("kanban:board:{}", board_id)
}

fn js_err(err: JsValue) -> String {
    format!("{:?}", err)
}

fn local_storage() -> Result<Storage, String> {
    web_sys::window()
        .ok_or("No window available")?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| "localStorage is not available".to_string())
}

// ========================
// Board Index
// ========================

fn decode_index(raw: Option<&str>) -> Result<Vec<BoardSummary>, String> {
    match raw {
        Some(data) => serde_json::from_str(data).map_err(|e| format!("Corrupt board index: {}", e)),
        None => Ok(Vec::new()),
    }
}

fn new_board_summary(
    existing: &[BoardSummary],
    name: &str,
    description: &str,
    created_at: i64,
) -> Result<BoardSummary, String> {
    let mut ids = IdGenerator::after(existing.iter().map(|board| board.id));
    let id = ids.next_id().ok_or("No board ids left")?;
    Ok(BoardSummary {
        id,
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        created_at,
    })
}

fn save_index(storage: &Storage, boards: &[BoardSummary]) -> Result<(), String> {
    let data = serde_json::to_string(boards).map_err(|e| e.to_string())?;
    storage.set_item(BOARD_INDEX_KEY, &data).map_err(js_err)
}

pub fn list_boards() -> Result<Vec<BoardSummary>, String> {
    let storage = local_storage()?;
    let raw = storage.get_item(BOARD_INDEX_KEY).map_err(js_err)?;
    decode_index(raw.as_deref())
}

pub fn create_board(name: &str, description: &str) -> Result<BoardSummary, String> {
    if name.trim().is_empty() {
        return Err("Board name is required".to_string());
    }
    let storage = local_storage()?;
    let mut boards = list_boards()?;
    let board = new_board_summary(&boards, name, description, js_sys::Date::now() as i64)?;

    boards.push(board.clone());
    save_index(&storage, &boards)?;
    save_board(board.id, &Snapshot::default())?;

    debug!(board = %board.id, name = %board.name, "board created");
    Ok(board)
}

/// Remove a board's blob and its index entry
pub fn delete_board(board_id: Id) -> Result<(), String> {
    let storage = local_storage()?;
    let mut boards = list_boards()?;
    boards.retain(|board| board.id != board_id);
    save_index(&storage, &boards)?;
    storage.remove_item(&board_key(board_id)).map_err(js_err)?;

    debug!(board = %board_id, "board deleted");
    Ok(())
}

// ========================
// Board Data
// ========================

/// Load a board; a board that was never saved is empty
pub fn load_board(board_id: Id) -> Result<Snapshot, String> {
    let storage = local_storage()?;
    match storage.get_item(&board_key(board_id)).map_err(js_err)? {
        Some(data) => Snapshot::from_json(&data).map_err(|e| e.to_string()),
        None => Ok(Snapshot::default()),
    }
}

pub fn save_board(board_id: Id, snapshot: &Snapshot) -> Result<(), String> {
    let data = snapshot.to_json().map_err(|e| e.to_string())?;
    write_board(board_id, &data)
}

fn write_board(board_id: Id, data: &str) -> Result<(), String> {
    local_storage()?
        .set_item(&board_key(board_id), data)
        .map_err(js_err)
}

/// Engine settings, with an optional JSON override in `localStorage`
pub fn load_config() -> KanbanConfig {
    let raw = local_storage().and_then(|storage| storage.get_item(CONFIG_KEY).map_err(js_err));
    match raw {
        Ok(Some(data)) => KanbanConfig::from_json(&data).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring kanban config override");
            KanbanConfig::default()
        }),
        Ok(None) => KanbanConfig::default(),
        Err(e) => {
            warn!(error = %e, "could not read kanban config");
            KanbanConfig::default()
        }
    }
}

/// Writes every committed snapshot of one board.
///
/// The write is queued on the local task queue, so the UI update that caused
/// it is never held up; failures are only logged.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageSink {
    board_id: Id,
}

impl LocalStorageSink {
    pub fn new(board_id: Id) -> Self {
        Self { board_id }
    }
}

impl SnapshotSink for LocalStorageSink {
    fn publish(&self, snapshot: &Snapshot) {
        let board_id = self.board_id;
        let data = match snapshot.to_json() {
            Ok(data) => data,
            Err(e) => {
                warn!(board = %board_id, error = %e, "could not encode board");
                return;
            }
        };
        spawn_local(async move {
            if let Err(e) = write_board(board_id, &data) {
                warn!(board = %board_id, error = %e, "failed to save board");
            }
        });
    }
}
