//! Delete Confirm Button Component
//!
//! Inline confirmation gate in front of a destructive action.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows the prompt with ✓/✗ buttons;
/// only ✓ runs `on_confirm`.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `prompt` - Question shown while waiting for confirmation
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                title="Delete"
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm" on:click=move |ev| ev.stop_propagation()>
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
