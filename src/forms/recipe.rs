//! New Recipe Draft

use crate::models::NewRecipe;

use super::{coerce_float, coerce_int, LineItems};

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub dish_name: String,
    pub rows: LineItems,
    pub prep_time: String,
    pub cooking_time: String,
    pub price: String,
    pub calories: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            dish_name: String::new(),
            rows: LineItems::with_blank_row(),
            prep_time: String::new(),
            cooking_time: String::new(),
            price: String::new(),
            calories: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSubmission {
    pub recipe: NewRecipe,
    pub duplicates: Vec<String>,
}

impl RecipeDraft {
    /// Ingredient quantities are free text (`500g`, `2 medium`); rows with a
    /// blank name or quantity are dropped.
    pub fn submit(&self) -> RecipeSubmission {
        let folded = self.rows.fold(|raw| {
            let raw = raw.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        });
        RecipeSubmission {
            recipe: NewRecipe {
                dish_name: self.dish_name.trim().to_string(),
                ingredients: folded.entries,
                calories: coerce_float(&self.calories).max(0.0),
                prep_time: coerce_int(&self.prep_time).max(0),
                cooking_time: coerce_int(&self.cooking_time).max(0),
                price: coerce_float(&self.price).max(0.0),
            },
            duplicates: folded.duplicates,
        }
    }
}
