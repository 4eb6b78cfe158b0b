//! Board List Component
//!
//! Lists saved boards, creates new ones and deletes old ones.

use leptos::prelude::*;
use tracing::warn;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Id;
use crate::persistence;
use crate::store::{store_add_board, store_boards, store_open_board, store_remove_board, use_app_store};

#[component]
pub fn BoardList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_board = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match persistence::create_board(&name.get_untracked(), &description.get_untracked()) {
            Ok(board) => {
                store_add_board(&store, board);
                set_name.set(String::new());
                set_description.set(String::new());
                ctx.clear_notice();
            }
            Err(e) => {
                warn!(error = %e, "create board failed");
                ctx.notify(e);
            }
        }
    };

    let delete_board = move |board_id: Id| match persistence::delete_board(board_id) {
        Ok(()) => store_remove_board(&store, board_id),
        Err(e) => {
            warn!(board = %board_id, error = %e, "delete board failed");
            ctx.notify(format!("Could not delete board: {}", e));
        }
    };

    view! {
        <div class="board-list-page">
            <h1>"Boards"</h1>

            <form class="new-board-form" on:submit=create_board>
                <input
                    type="text"
                    placeholder="Board name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit">"Create board"</button>
            </form>

            <Show
                when=move || !store_boards(&store).is_empty()
                fallback=|| view! { <p class="empty-placeholder">"No boards yet. Create one to get started."</p> }
            >
                <ul class="board-list">
                    <For
                        each=move || store_boards(&store)
                        key=|board| board.id
                        children=move |board| {
                            let board_id = board.id;
                            view! {
                                <li class="board-card">
                                    <button class="board-open" on:click=move |_| store_open_board(&store, board_id)>
                                        <span class="board-name">{board.name.clone()}</span>
                                        <span class="board-description">{board.description.clone()}</span>
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        prompt="Delete this board?"
                                        on_confirm=Callback::new(move |_: ()| delete_board(board_id))
                                    />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
