//! Kanban Board Component
//!
//! Hosts one board session: the engine, the pointer drag source feeding it,
//! and the column strip.

use kanban_core::{Board, DragEvent, KanbanEngine};
use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouse_handlers, create_dnd_signals, DndSignals, DragPhase};
use tracing::{debug, warn};

use crate::components::ColumnContainer;
use crate::context::use_app_context;
use crate::models::{DragRef, Id, Snapshot};
use crate::persistence::{self, LocalStorageSink};
use crate::store::{store_board_name, store_close_board, use_app_store};

/// Handle to the open board, passed down to columns and cards
#[derive(Clone, Copy)]
pub struct BoardHandle {
    pub engine: RwSignal<KanbanEngine>,
    pub dnd: DndSignals<DragRef>,
    /// Task created from the UI whose card has not opened its editor yet
    new_task: RwSignal<Option<Id>>,
}

impl BoardHandle {
    pub fn new(engine: RwSignal<KanbanEngine>, dnd: DndSignals<DragRef>) -> Self {
        Self {
            engine,
            dnd,
            new_task: RwSignal::new(None),
        }
    }

    /// Append a task to a column; its card starts in edit mode
    pub fn add_task(&self, column_id: Id) -> Option<Id> {
        let mut created = None;
        self.engine.update(|e| created = e.board_mut().create_task(column_id));
        self.new_task.set(created);
        created
    }

    /// Whether `task_id` was just added, clearing the mark
    pub fn take_new_task(&self, task_id: Id) -> bool {
        if self.new_task.get_untracked() != Some(task_id) {
            return false;
        }
        self.new_task.set(None);
        true
    }
}

/// Resolve a pointer phase against the live board and hand it to the engine
fn dispatch(engine: &mut KanbanEngine, phase: DragPhase<DragRef>) {
    let event = match phase {
        DragPhase::Start { active } => engine.resolve(active).map(|active| DragEvent::Start { active }),
        DragPhase::Over { active, over } => engine.resolve(active).map(|active| DragEvent::Over {
            active,
            over: engine.resolve(over),
        }),
        DragPhase::End { active, over } => match engine.resolve(active) {
            Some(active) => Some(DragEvent::End {
                active,
                over: over.and_then(|over| engine.resolve(over)),
            }),
            None => {
                // Dragged entity was deleted mid-gesture
                engine.cancel_drag();
                None
            }
        },
    };

    if let Some(event) = event {
        engine.handle(event);
    }
}

#[component]
pub fn KanbanBoard(board_id: Id) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Never start a corrupt board empty: the first commit would overwrite it
    match persistence::load_board(board_id) {
        Ok(snapshot) => view! { <BoardView board_id=board_id snapshot=snapshot /> }.into_any(),
        Err(e) => {
            warn!(board = %board_id, error = %e, "could not load board");
            ctx.notify(format!("Could not load board: {}", e));
            view! {
                <div class="board-page">
                    <button class="back-btn" on:click=move |_| store_close_board(&store)>"← Boards"</button>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn BoardView(board_id: Id, snapshot: Snapshot) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    debug!(board = %board_id, columns = snapshot.columns.len(), tasks = snapshot.tasks.len(), "open board");
    let board = Board::new(snapshot, LocalStorageSink::new(board_id), ctx.config);
    let engine = RwSignal::new(KanbanEngine::new(board));

    let on_phase = Callback::new(move |phase: DragPhase<DragRef>| {
        engine.update(|engine| dispatch(engine, phase));
    });
    let dnd = create_dnd_signals(ctx.config.drag_threshold_px, on_phase);
    bind_global_mouse_handlers(dnd);

    let handle = BoardHandle::new(engine, dnd);

    let column_ids = move || engine.with(|e| e.board().columns().iter().map(|c| c.id).collect::<Vec<_>>());
    let is_dragging = move || if dnd.is_dragging() { "board-columns dragging" } else { "board-columns" };

    view! {
        <div class="board-page">
            <header class="board-header">
                <button class="back-btn" on:click=move |_| store_close_board(&store)>"← Boards"</button>
                <h1>{move || store_board_name(&store, board_id)}</h1>
            </header>

            <div class="board-scroll">
                <div class=is_dragging>
                    <For
                        each=column_ids
                        key=|id| *id
                        children=move |column_id| view! { <ColumnContainer board=handle column_id=column_id /> }
                    />

                    <button
                        class="add-column-btn"
                        on:click=move |_| {
                            engine.update(|e| {
                                e.board_mut().create_column();
                            });
                        }
                    >
                        "+ Add Column"
                    </button>
                </div>
            </div>
        </div>
    }
}
