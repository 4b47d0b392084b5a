//! Orders View
//!
//! Order cards with status filter and search, plus the new-order form.

use chrono::Utc;
use leptos::prelude::*;
use web_sys::SubmitEvent;

use crate::api::OrdersApi;
use crate::components::{bind_setter, bind_text, Field, LineEdit, LineItemsEditor, LoadState};
use crate::context::use_app_context;
use crate::forms::OrderDraft;
use crate::models::{date_part, filter_orders, time_part, Order, OrderStatus, StatusFilter};
use crate::store::Notice;
use crate::sync::ViewSync;

#[component]
pub fn OrdersView() -> impl IntoView {
    let ctx = use_app_context();
    let sync = ViewSync::mount(OrdersApi::new(ctx.client()), ());

    let (search, set_search) = signal(String::new());
    let (filter, set_filter) = signal(StatusFilter::All);
    let (form_open, set_form_open) = signal(false);
    let draft = RwSignal::new(OrderDraft::default());

    let visible = move || {
        let orders = sync.items();
        filter_orders(&orders, filter.get(), &search.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match draft.with_untracked(|d| d.submit(Utc::now())) {
            Ok(submission) => submission,
            Err(err) => {
                ctx.notify(Notice::failure(err.to_string()));
                return;
            }
        };
        let duplicates = submission.duplicates;
        sync.create(submission.order, move |result| {
            if result.is_err() {
                ctx.report(&result, "");
                return;
            }
            draft.set(OrderDraft::default());
            set_form_open.set(false);
            if duplicates.is_empty() {
                ctx.report(&result, "Order successfully added!");
            } else {
                ctx.notify(Notice::warning(format!(
                    "Order successfully added! Repeated items were merged: {}",
                    duplicates.join(", ")
                )));
            }
        });
    };

    let rows = Signal::derive(move || draft.with(|d| d.rows.clone()));
    let edit_rows = Callback::new(move |edit: LineEdit| draft.update(|d| edit.apply(&mut d.rows)));

    view! {
        <section class="view orders-view">
            <div class="view-header">
                <h1 class="view-title">"Orders"</h1>
                <div class="view-actions">
                    <button class="secondary-btn" on:click=move |_| sync.refresh()>"↻ Refresh"</button>
                    <button class="primary-btn" on:click=move |_| set_form_open.update(|open| *open = !*open)>
                        {move || if form_open.get() { "Close Form" } else { "+ New Order" }}
                    </button>
                </div>
            </div>

            <Show when=move || form_open.get()>
                <form class="panel order-form" on:submit=submit>
                    <h2>"New Order"</h2>
                    <Field
                        label="Customer ID"
                        kind="number"
                        value=bind_text(draft, |d| d.customer_id.clone())
                        on_input=bind_setter(draft, |d, v| d.customer_id = v)
                        required=true
                    />
                    <span class="form-label">"Items"</span>
                    <LineItemsEditor rows=rows on_change=edit_rows name_placeholder="Dish name" />
                    <Field
                        label="Total Bill"
                        kind="number"
                        value=bind_text(draft, |d| d.total_bill.clone())
                        on_input=bind_setter(draft, |d, v| d.total_bill = v)
                    />
                    <label class="form-field">
                        <span class="form-label">"Status"</span>
                        <select on:change=move |ev| {
                            let status = OrderStatus::from_label(&event_target_value(&ev));
                            draft.update(|d| d.status = status);
                        }>
                            {OrderStatus::SELECTABLE.into_iter().map(|status| view! {
                                <option
                                    value=status.as_str()
                                    selected=move || draft.with(|d| d.status == status)
                                >
                                    {status.as_str()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| {
                            draft.set(OrderDraft::default());
                            set_form_open.set(false);
                        }>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn">"Place Order"</button>
                    </div>
                </form>
            </Show>

            <div class="toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by order ID or item..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="status-filter"
                    on:change=move |ev| set_filter.set(StatusFilter::from_label(&event_target_value(&ev)))
                >
                    {StatusFilter::options().into_iter().map(|option| view! {
                        <option value=option.label() selected=move || filter.get() == option>
                            {option.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <LoadState
                loading=Signal::derive(move || sync.is_loading())
                error=Signal::derive(move || sync.error())
                loading_text="Loading orders..."
            />

            <div class="card-grid">
                {move || visible().into_iter().map(order_card).collect_view()}
            </div>

            <Show when=move || !sync.is_loading() && sync.error().is_none() && visible().is_empty()>
                <p class="empty-state">"No orders found."</p>
            </Show>
        </section>
    }
}

fn order_card(order: Order) -> impl IntoView {
    let when = format!(
        "{} {}",
        date_part(&order.date_time),
        time_part(&order.date_time).unwrap_or_default()
    );
    view! {
        <div class="card order-card">
            <div class="card-header">
                <span class="order-id">"#" {order.order_id}</span>
                <span class=order.order_status.badge_class()>{order.order_status.as_str()}</span>
            </div>
            <div class="card-meta">
                <span>"Customer " {order.customer_id}</span>
                <span class="muted">{when.trim().to_string()}</span>
            </div>
            <ul class="line-list">
                {order.items_ordered.iter().map(|(name, qty)| view! {
                    <li>
                        <span>{name.clone()}</span>
                        <span class="muted">"× " {qty.to_string()}</span>
                    </li>
                }).collect_view()}
            </ul>
            <div class="card-footer">
                <span>"Total"</span>
                <strong>{format!("₹{:.2}", order.total_bill)}</strong>
            </div>
        </div>
    }
}
