//! Sidebar Component
//!
//! Navigation between dashboard sections.

use leptos::prelude::*;

use crate::store::{store_switch_view, use_shell_store, ShellStateStoreFields, ViewId};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_shell_store();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"Kitchen Admin"</div>
            <ul class="sidebar-nav">
                {ViewId::ALL.into_iter().map(|view_id| {
                    let is_active = move || store.active_view().get() == view_id;
                    view! {
                        <li>
                            <button
                                class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                                on:click=move |_| store_switch_view(&store, view_id)
                            >
                                <span class="nav-icon">{view_id.icon()}</span>
                                <span class="nav-label">{view_id.title()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
