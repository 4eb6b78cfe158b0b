//! Column Container Component
//!
//! One board column: editable title, drag handle, its task cards and an add
//! button.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_handle_mousedown, make_on_target_mouseleave, make_on_target_mouseover};
use web_sys::KeyboardEvent;

use crate::components::{BoardHandle, DeleteConfirmButton, TaskCard};
use crate::models::{DragRef, Id};

#[component]
pub fn ColumnContainer(board: BoardHandle, column_id: Id) -> impl IntoView {
    let BoardHandle { engine, dnd, .. } = board;
    let drag_ref = DragRef::column(column_id);

    let title = move || {
        engine.with(|e| e.board().column(column_id).map(|c| c.title.clone()).unwrap_or_default())
    };
    let task_ids = move || engine.with(|e| e.board().tasks_in(column_id).map(|t| t.id).collect::<Vec<_>>());
    let task_count = move || engine.with(|e| e.board().tasks_in(column_id).count());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let start_edit = move |_ev: web_sys::MouseEvent| {
        // The release of a column drag lands on the title too
        if dnd.drag_just_ended() {
            return;
        }
        set_draft.set(title());
        set_editing.set(true);
    };

    let commit_edit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        engine.update(|e| {
            e.board_mut().rename_column(column_id, draft.get_untracked());
        });
    };

    let on_title_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            commit_edit();
        }
    };

    let section_class = move || {
        let mut class = String::from("column");
        if engine.with(|e| e.drag().active_column().is_some_and(|c| c.id == column_id)) {
            class.push_str(" dragging");
        }
        if dnd.over() == Some(drag_ref) {
            class.push_str(" drop-target");
        }
        class
    };

    view! {
        <section
            class=section_class
            on:mouseover=make_on_target_mouseover(dnd, drag_ref)
            on:mouseleave=make_on_target_mouseleave(dnd, drag_ref)
        >
            <header class="column-header">
                <span class="drag-handle" title="Drag column" on:mousedown=make_on_handle_mousedown(dnd, drag_ref)>
                    "⋮⋮"
                </span>
                <span class="task-count">{task_count}</span>
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <h2 class="column-title" on:click=start_edit>{title}</h2> }
                >
                    <input
                        class="column-title-input"
                        type="text"
                        node_ref=input_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:blur=move |_| commit_edit()
                        on:keydown=on_title_keydown
                        on:mousedown=move |ev| ev.stop_propagation()
                    />
                </Show>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    prompt="Delete this column?"
                    on_confirm=Callback::new(move |_: ()| {
                        engine.update(|e| {
                            e.board_mut().delete_column(column_id);
                        });
                    })
                />
            </header>

            <div class="column-tasks">
                <For
                    each=task_ids
                    key=|id| *id
                    children=move |task_id| view! { <TaskCard board=board task_id=task_id /> }
                />
            </div>

            <button
                class="add-task-btn"
                on:click=move |_| {
                    board.add_task(column_id);
                }
            >
                "+ Add task"
            </button>
        </section>
    }
}
