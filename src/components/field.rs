//! Form Field Component
//!
//! Labelled text input bound to one string of a draft signal.

use leptos::prelude::*;

#[component]
pub fn Field(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    /// HTML input type
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label.clone()}</span>
            <input
                type=kind
                placeholder=label
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Read one field of a draft as a signal.
pub fn bind_text<T: Send + Sync + 'static>(draft: RwSignal<T>, get: fn(&T) -> String) -> Signal<String> {
    Signal::derive(move || draft.with(get))
}

/// Write one field of a draft.
pub fn bind_setter<T: Send + Sync + 'static>(draft: RwSignal<T>, set: fn(&mut T, String)) -> Callback<String> {
    Callback::new(move |value: String| draft.update(|d| set(d, value)))
}
