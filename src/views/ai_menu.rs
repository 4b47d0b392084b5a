//! AI Menu View
//!
//! Dishes the current stock can produce, priced by ingredient freshness.

use leptos::prelude::*;

use crate::api::MenuApi;
use crate::components::LoadState;
use crate::context::use_app_context;
use crate::models::MenuItem;
use crate::sync::ViewSync;

#[component]
pub fn AiMenuView() -> impl IntoView {
    let ctx = use_app_context();
    let sync = ViewSync::mount(MenuApi::new(ctx.client()), ());

    view! {
        <section class="view menu-view">
            <div class="view-header">
                <h1 class="view-title">"AI Menu"</h1>
                <button
                    class="primary-btn"
                    disabled=move || sync.is_loading()
                    on:click=move |_| sync.refresh()
                >
                    "↻ Regenerate Menu"
                </button>
            </div>

            <LoadState
                loading=Signal::derive(move || sync.is_loading())
                error=Signal::derive(move || sync.error())
                loading_text="Building menu from current stock..."
            />

            <div class="card-grid">
                {move || sync.items().into_iter().map(menu_card).collect_view()}
            </div>

            <Show when=move || !sync.is_loading() && sync.error().is_none() && sync.is_empty()>
                <p class="empty-state">"No dishes can be made from the current inventory."</p>
            </Show>
        </section>
    }
}

fn menu_card(item: MenuItem) -> impl IntoView {
    view! {
        <div class="card menu-card" class:recommended=item.recommended>
            <div class="card-header">
                <h3>{item.dish_name.clone()}</h3>
                {item.recommended.then(|| view! { <span class="badge recommended">"★ Recommended"</span> })}
            </div>
            <div class="price-row">
                <strong class="price">{format!("₹{:.2}", item.final_price)}</strong>
                <span class="muted">"Cost " {format!("₹{:.2}", item.total_cost)}</span>
                <span class="margin">{item.profit_margin.clone()} " margin"</span>
            </div>
            {item.earliest_expiry.clone().map(|date| view! {
                <div class="card-meta">"Earliest expiry: " {date}</div>
            })}
            <ul class="expiry-list">
                {item.expiring_soon.iter().map(|note| view! { <li class="warning">"⚠ " {note.clone()}</li> }).collect_view()}
            </ul>
        </div>
    }
}
