//! Inventory View
//!
//! Stock table with search and category filter, plus the add/edit modal.

use leptos::prelude::*;
use web_sys::{MouseEvent, SubmitEvent};

use crate::api::InventoryApi;
use crate::components::{bind_setter, bind_text, DeleteConfirmButton, Field, LoadState};
use crate::context::use_app_context;
use crate::forms::{format_number, InventoryDraft};
use crate::models::{categories, date_part, filter_items, InventoryItem};
use crate::sync::ViewSync;

/// Which modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Editor {
    Add,
    Edit(i64),
}

#[component]
pub fn InventoryView() -> impl IntoView {
    let ctx = use_app_context();
    let sync = ViewSync::mount(InventoryApi::new(ctx.client()), ());

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal::<Option<String>>(None);
    let (editor, set_editor) = signal::<Option<Editor>>(None);
    let draft = RwSignal::new(InventoryDraft::default());

    let visible = move || {
        let items = sync.items();
        let selected = category.get();
        filter_items(&items, selected.as_deref(), &search.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let open_add = move |_: MouseEvent| {
        draft.set(InventoryDraft::default());
        set_editor.set(Some(Editor::Add));
    };

    let open_edit = move |item: InventoryItem| {
        draft.set(InventoryDraft::from_item(&item));
        set_editor.set(Some(Editor::Edit(item.item_id)));
    };

    let submit = move |mode: Editor| {
        let current = draft.get_untracked();
        set_editor.set(None);
        match mode {
            Editor::Add => sync.create(current.to_new_item(), move |result| {
                ctx.report(&result, "Item added successfully")
            }),
            Editor::Edit(id) => sync.update(id, current.to_patch(), move |result| {
                ctx.report(&result, "Item updated successfully")
            }),
        }
    };

    let delete = move |id: i64| {
        sync.delete(id, move |result| ctx.report(&result, "Item deleted successfully"));
    };

    view! {
        <section class="view inventory-view">
            <div class="view-header">
                <h1 class="view-title">"Inventory"</h1>
                <div class="view-actions">
                    <button class="secondary-btn" on:click=move |_| sync.refresh()>"↻ Refresh"</button>
                    <button class="primary-btn" on:click=open_add>"+ Add Item"</button>
                </div>
            </div>

            <div class="toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search items..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="category-filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_category.set((!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"All Categories"</option>
                    {move || categories(&sync.items()).into_iter().map(|name| {
                        let is_selected = {
                            let name = name.clone();
                            move || category.get().as_deref() == Some(name.as_str())
                        };
                        let label = name.clone();
                        view! { <option value=name selected=is_selected>{label}</option> }
                    }).collect_view()}
                </select>
            </div>

            <LoadState
                loading=Signal::derive(move || sync.is_loading())
                error=Signal::derive(move || sync.error())
                loading_text="Loading inventory..."
            />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Category"</th>
                        <th>"Quantity"</th>
                        <th>"Price / Unit"</th>
                        <th>"Expiry"</th>
                        <th>"Location"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible().into_iter().map(|item| {
                        let id = item.item_id;
                        let edit_source = item.clone();
                        view! {
                            <tr class:provisional={id < 0}>
                                <td>
                                    {item.item_name.clone()}
                                    {item.detected_by_ai.then(|| view! { <span class="ai-tag">"AI"</span> })}
                                </td>
                                <td>{item.category.clone()}</td>
                                <td>{format_number(item.quantity)} " " {item.unit.clone()}</td>
                                <td>{format!("₹{:.2}", item.price_per_unit)}</td>
                                <td>{date_part(&item.expiry_date)}</td>
                                <td>{item.storage_location.clone()}</td>
                                <td class="row-actions">
                                    <button
                                        class="edit-btn"
                                        title="Edit"
                                        disabled={id < 0}
                                        on:click=move |_| open_edit(edit_source.clone())
                                    >
                                        "✎"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        disabled={id < 0}
                                        on_confirm=Callback::new(move |_: ()| delete(id))
                                    />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || !sync.is_loading() && sync.error().is_none() && visible().is_empty()>
                <p class="empty-state">"No inventory items found."</p>
            </Show>

            {move || editor.get().map(|mode| {
                let (title, submit_label) = match mode {
                    Editor::Add => ("Add Inventory Item", "Add Item"),
                    Editor::Edit(_) => ("Edit Inventory Item", "Save Changes"),
                };
                view! {
                    <div class="modal-backdrop">
                        <form
                            class="modal"
                            on:submit=move |ev: SubmitEvent| {
                                ev.prevent_default();
                                submit(mode);
                            }
                        >
                            <h2>{title}</h2>
                            <Field
                                label="Item Name"
                                value=bind_text(draft, |d| d.item_name.clone())
                                on_input=bind_setter(draft, |d, v| d.item_name = v)
                                required=true
                            />
                            <Field
                                label="Category"
                                value=bind_text(draft, |d| d.category.clone())
                                on_input=bind_setter(draft, |d, v| d.category = v)
                            />
                            <div class="form-row">
                                <Field
                                    label="Quantity"
                                    kind="number"
                                    value=bind_text(draft, |d| d.quantity.clone())
                                    on_input=bind_setter(draft, |d, v| d.quantity = v)
                                />
                                <Field
                                    label="Unit"
                                    value=bind_text(draft, |d| d.unit.clone())
                                    on_input=bind_setter(draft, |d, v| d.unit = v)
                                />
                            </div>
                            <Field
                                label="Price per Unit"
                                kind="number"
                                value=bind_text(draft, |d| d.price_per_unit.clone())
                                on_input=bind_setter(draft, |d, v| d.price_per_unit = v)
                            />
                            <Field
                                label="Expiry Date"
                                kind="date"
                                value=bind_text(draft, |d| d.expiry_date.clone())
                                on_input=bind_setter(draft, |d, v| d.expiry_date = v)
                            />
                            <Field
                                label="Storage Location"
                                value=bind_text(draft, |d| d.storage_location.clone())
                                on_input=bind_setter(draft, |d, v| d.storage_location = v)
                            />
                            <div class="modal-actions">
                                <button type="button" class="secondary-btn" on:click=move |_| set_editor.set(None)>
                                    "Cancel"
                                </button>
                                <button type="submit" class="primary-btn">{submit_label}</button>
                            </div>
                        </form>
                    </div>
                }
            })}
        </section>
    }
}
