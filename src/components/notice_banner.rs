//! Notice Banner Component

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_shell_store, ShellStateStoreFields};

/// Success/failure message of the last mutation in the active view
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_shell_store();

    move || {
        store.notice().get().map(|notice| {
            view! {
                <div class=notice.class()>
                    <span class="notice-text">{notice.text.clone()}</span>
                    <button class="notice-close" on:click=move |_| store_dismiss_notice(&store)>"×"</button>
                </div>
            }
        })
    }
}
