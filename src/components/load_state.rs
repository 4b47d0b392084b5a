//! Load State Component
//!
//! Loading and error lines shown above a mirrored collection.

use leptos::prelude::*;

#[component]
pub fn LoadState(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "Loading...")] loading_text: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="load-state loading">
                <span class="spinner"></span>
                {loading_text}
            </div>
        </Show>
        {move || error.get().map(|err| view! {
            <div class="load-state error">"⚠ " {err}</div>
        })}
    }
}
