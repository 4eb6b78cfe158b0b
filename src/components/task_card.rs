//! Task Card Component

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_handle_mousedown, make_on_target_mouseleave, make_on_target_mouseover};
use web_sys::KeyboardEvent;

use crate::components::{BoardHandle, DeleteConfirmButton};
use crate::models::{DragRef, Id};

/// Task card; click to edit, Shift+Enter or blur to save
#[component]
pub fn TaskCard(board: BoardHandle, task_id: Id) -> impl IntoView {
    let BoardHandle { engine, dnd, .. } = board;
    let drag_ref = DragRef::task(task_id);

    let content = move || engine.with(|e| e.board().task(task_id).map(|t| t.content.clone()).unwrap_or_default());

    // Cards for tasks just added from the UI open straight into the editor
    let fresh = board.take_new_task(task_id);
    let initial_draft = if fresh {
        engine.with_untracked(|e| e.board().task(task_id).map(|t| t.content.clone()).unwrap_or_default())
    } else {
        String::new()
    };
    let (editing, set_editing) = signal(fresh);
    let (draft, set_draft) = signal(initial_draft);
    let textarea_ref = NodeRef::<html::Textarea>::new();

    Effect::new(move |_| {
        if editing.get() {
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
            }
        }
    });

    let start_edit = move |_ev: web_sys::MouseEvent| {
        if dnd.drag_just_ended() || editing.get_untracked() {
            return;
        }
        set_draft.set(content());
        set_editing.set(true);
    };

    let commit_edit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        engine.update(|e| {
            e.board_mut().update_task_content(task_id, draft.get_untracked());
        });
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && ev.shift_key() {
            ev.prevent_default();
            commit_edit();
        }
    };

    let card_class = move || {
        let mut class = String::from("task-card");
        if engine.with(|e| e.drag().active_task().is_some_and(|t| t.id == task_id)) {
            class.push_str(" dragging");
        }
        if dnd.over() == Some(drag_ref) {
            class.push_str(" drop-target");
        }
        if editing.get() {
            class.push_str(" editing");
        }
        class
    };

    view! {
        <div
            class=card_class
            on:click=start_edit
            on:mouseover=make_on_target_mouseover(dnd, drag_ref)
            on:mouseleave=make_on_target_mouseleave(dnd, drag_ref)
        >
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <span class="drag-handle" title="Drag task" on:mousedown=make_on_handle_mousedown(dnd, drag_ref)>
                            "⋮⋮"
                        </span>
                        <p class="task-content">{content}</p>
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            prompt="Delete this task?"
                            on_confirm=Callback::new(move |_: ()| {
                                engine.update(|e| {
                                    e.board_mut().delete_task(task_id);
                                });
                            })
                        />
                    }
                }
            >
                <textarea
                    class="task-content-input"
                    node_ref=textarea_ref
                    placeholder="Task content here"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:blur=move |_| commit_edit()
                    on:keydown=on_keydown
                    on:mousedown=move |ev| ev.stop_propagation()
                />
            </Show>
        </div>
    }
}
