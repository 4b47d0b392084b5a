//! Line Items Editor Component
//!
//! Editable name/quantity rows used by the order and recipe forms.

use leptos::prelude::*;

use crate::forms::{LineItems, RowId};

#[component]
pub fn LineItemsEditor(
    /// Draft signal holding the rows
    rows: Signal<LineItems>,
    /// Apply an edit to the rows
    on_change: Callback<LineEdit>,
    #[prop(default = "Item name")] name_placeholder: &'static str,
    #[prop(default = "Qty")] quantity_placeholder: &'static str,
    #[prop(default = "number")] quantity_kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="line-items">
            <For
                each=move || rows.with(|items| items.rows().iter().map(|row| row.id).collect::<Vec<_>>())
                key=|id| *id
                children=move |id| {
                    let name = move || rows.with(|items| {
                        items.rows().iter().find(|r| r.id == id).map(|r| r.name.clone()).unwrap_or_default()
                    });
                    let quantity = move || rows.with(|items| {
                        items.rows().iter().find(|r| r.id == id).map(|r| r.quantity.clone()).unwrap_or_default()
                    });
                    view! {
                        <div class="line-item-row">
                            <input
                                type="text"
                                placeholder=name_placeholder
                                prop:value=name
                                on:input=move |ev| on_change.run(LineEdit::Name(id, event_target_value(&ev)))
                            />
                            <input
                                type=quantity_kind
                                class="qty-input"
                                placeholder=quantity_placeholder
                                prop:value=quantity
                                on:input=move |ev| on_change.run(LineEdit::Quantity(id, event_target_value(&ev)))
                            />
                            <button
                                type="button"
                                class="remove-row-btn"
                                on:click=move |_| on_change.run(LineEdit::Remove(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
            <button type="button" class="add-row-btn" on:click=move |_| on_change.run(LineEdit::Add)>
                "+ Add Item"
            </button>
        </div>
    }
}

/// One user edit of the line item rows
#[derive(Debug, Clone, PartialEq)]
pub enum LineEdit {
    Add,
    Remove(RowId),
    Name(RowId, String),
    Quantity(RowId, String),
}

impl LineEdit {
    pub fn apply(self, items: &mut LineItems) {
        match self {
            LineEdit::Add => {
                items.add_row();
            }
            LineEdit::Remove(id) => {
                items.remove_row(id);
            }
            LineEdit::Name(id, name) => items.set_name(id, name),
            LineEdit::Quantity(id, quantity) => items.set_quantity(id, quantity),
        }
    }
}
