//! Kanban Frontend App
//!
//! Shows the board list, or the open board.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{info, warn};

use crate::components::{BoardList, KanbanBoard};
use crate::context::AppContext;
use crate::persistence;
use crate::store::{store_current_board, AppState};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(persistence::load_config(), signal(None::<String>));
    provide_context(ctx);

    let boards = persistence::list_boards().unwrap_or_else(|e| {
        warn!(error = %e, "could not load board index");
        ctx.notify(format!("Could not load boards: {}", e));
        Vec::new()
    });
    info!(boards = boards.len(), "app started");

    let store = Store::new(AppState::new(boards));
    provide_context(store);

    view! {
        <div class="app-layout">
            {move || ctx.notice.get().map(|message| view! {
                <div class="notice">
                    <span>{message}</span>
                    <button class="notice-close" on:click=move |_| ctx.clear_notice()>"×"</button>
                </div>
            })}

            {move || match store_current_board(&store) {
                Some(board_id) => view! { <KanbanBoard board_id=board_id /> }.into_any(),
                None => view! { <BoardList /> }.into_any(),
            }}
        </div>
    }
}
