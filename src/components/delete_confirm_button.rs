//! Delete Confirm Button Component
//!
//! Two-step inline delete: the first click arms it, ✓ fires, ✗ disarms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the unarmed button
/// * `prompt` - text shown while armed
/// * `disabled` - keep the button inert, e.g. for rows the server has not confirmed yet
/// * `on_confirm` - runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(default = "Delete?")] prompt: &'static str,
    #[prop(optional)] disabled: bool,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    move || {
        if !armed.get() {
            return view! {
                <button
                    type="button"
                    class=button_class.clone()
                    title="Delete"
                    disabled=disabled
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "🗑"
                </button>
            }
            .into_any();
        }
        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        }
        .into_any()
    }
}
