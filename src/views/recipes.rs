//! Recipes View
//!
//! Stored recipes, AI dish suggestions generated on demand, and the
//! add-recipe modal.

use std::collections::BTreeMap;

use leptos::prelude::*;
use web_sys::SubmitEvent;

use crate::api::{DishSuggestionsApi, RecipesApi};
use crate::components::{bind_setter, bind_text, Field, LineEdit, LineItemsEditor, LoadState};
use crate::context::use_app_context;
use crate::forms::{format_number, RecipeDraft};
use crate::models::{Quantity, Recipe, SuggestedDish};
use crate::store::Notice;
use crate::sync::ViewSync;

#[component]
pub fn RecipesView() -> impl IntoView {
    let ctx = use_app_context();
    let recipes = ViewSync::mount(RecipesApi::new(ctx.client()), ());
    // Generation is slow and costly; only on request.
    let suggestions = ViewSync::new(DishSuggestionsApi::new(ctx.client()), ());

    let (modal_open, set_modal_open) = signal(false);
    let draft = RwSignal::new(RecipeDraft::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = draft.with_untracked(RecipeDraft::submit);
        let duplicates = submission.duplicates;
        set_modal_open.set(false);
        recipes.create(submission.recipe, move |result| {
            if result.is_ok() {
                draft.set(RecipeDraft::default());
            }
            if result.is_ok() && !duplicates.is_empty() {
                ctx.notify(Notice::warning(format!(
                    "Recipe added. Repeated ingredients were merged: {}",
                    duplicates.join(", ")
                )));
            } else {
                ctx.report(&result, "Recipe added successfully");
            }
        });
    };

    let rows = Signal::derive(move || draft.with(|d| d.rows.clone()));
    let edit_rows = Callback::new(move |edit: LineEdit| draft.update(|d| edit.apply(&mut d.rows)));

    view! {
        <section class="view recipes-view">
            <div class="view-header">
                <h1 class="view-title">"Recipes"</h1>
                <div class="view-actions">
                    <button
                        class="secondary-btn"
                        disabled=move || suggestions.is_loading()
                        on:click=move |_| suggestions.refresh()
                    >
                        {move || if suggestions.is_loading() { "Generating..." } else { "✨ Generate Recipes" }}
                    </button>
                    <button class="primary-btn" on:click=move |_| set_modal_open.set(true)>"+ Add Recipe"</button>
                </div>
            </div>

            <LoadState
                loading=Signal::derive(move || suggestions.is_loading())
                error=Signal::derive(move || suggestions.error())
                loading_text="Generating dish suggestions..."
            />
            <Show when=move || !suggestions.is_empty()>
                <h2 class="section-title">"Suggested Dishes"</h2>
                <div class="card-grid">
                    {move || suggestions.items().into_iter().map(suggestion_card).collect_view()}
                </div>
            </Show>

            <h2 class="section-title">"Saved Recipes"</h2>
            <LoadState
                loading=Signal::derive(move || recipes.is_loading())
                error=Signal::derive(move || recipes.error())
                loading_text="Loading recipes..."
            />
            <div class="card-grid">
                {move || recipes.items().into_iter().map(recipe_card).collect_view()}
            </div>
            <Show when=move || !recipes.is_loading() && recipes.error().is_none() && recipes.is_empty()>
                <p class="empty-state">"No recipes yet."</p>
            </Show>

            <Show when=move || modal_open.get()>
                <div class="modal-backdrop">
                    <form class="modal" on:submit=submit>
                        <h2>"Add Recipe"</h2>
                        <Field
                            label="Dish Name"
                            value=bind_text(draft, |d| d.dish_name.clone())
                            on_input=bind_setter(draft, |d, v| d.dish_name = v)
                            required=true
                        />
                        <span class="form-label">"Ingredients"</span>
                        <LineItemsEditor
                            rows=rows
                            on_change=edit_rows
                            name_placeholder="Ingredient"
                            quantity_placeholder="Quantity (e.g. 500g)"
                            quantity_kind="text"
                        />
                        <div class="form-row">
                            <Field
                                label="Prep Time (min)"
                                kind="number"
                                value=bind_text(draft, |d| d.prep_time.clone())
                                on_input=bind_setter(draft, |d, v| d.prep_time = v)
                            />
                            <Field
                                label="Cooking Time (min)"
                                kind="number"
                                value=bind_text(draft, |d| d.cooking_time.clone())
                                on_input=bind_setter(draft, |d, v| d.cooking_time = v)
                            />
                        </div>
                        <div class="form-row">
                            <Field
                                label="Price"
                                kind="number"
                                value=bind_text(draft, |d| d.price.clone())
                                on_input=bind_setter(draft, |d, v| d.price = v)
                            />
                            <Field
                                label="Calories"
                                kind="number"
                                value=bind_text(draft, |d| d.calories.clone())
                                on_input=bind_setter(draft, |d, v| d.calories = v)
                            />
                        </div>
                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| set_modal_open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">"Save Recipe"</button>
                        </div>
                    </form>
                </div>
            </Show>
        </section>
    }
}

fn ingredient_list(ingredients: &BTreeMap<String, Quantity>) -> impl IntoView {
    view! {
        <ul class="line-list">
            {ingredients.iter().map(|(name, qty)| view! {
                <li>
                    <span>{name.clone()}</span>
                    <span class="muted">{qty.to_string()}</span>
                </li>
            }).collect_view()}
        </ul>
    }
}

fn recipe_card(recipe: Recipe) -> impl IntoView {
    view! {
        <div class="card recipe-card" class:provisional={recipe.recipe_id < 0}>
            <div class="card-header">
                <h3>{recipe.dish_name.clone()}</h3>
                {recipe.price.map(|price| view! { <span class="price">{format!("₹{:.2}", price)}</span> })}
            </div>
            <div class="card-meta">
                <span>"Prep " {recipe.prep_time} " min"</span>
                <span>"Cook " {recipe.cooking_time} " min"</span>
                <span>{format_number(recipe.calories)} " kcal"</span>
            </div>
            {ingredient_list(&recipe.ingredients)}
        </div>
    }
}

fn suggestion_card(dish: SuggestedDish) -> impl IntoView {
    view! {
        <div class="card suggestion-card">
            <div class="card-header">
                <h3>{dish.dish_name.clone()}</h3>
                <span class="ai-tag">"AI"</span>
            </div>
            <div class="card-meta">
                <span>"Prep " {format_number(dish.prep_time)} " min"</span>
                <span>"Cook " {format_number(dish.cooking_time)} " min"</span>
                <span>{format_number(dish.calories)} " kcal"</span>
            </div>
            {ingredient_list(&dish.ingredients)}
        </div>
    }
}
