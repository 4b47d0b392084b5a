//! Recipe Models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::{null_as_default, Entity};
use super::quantity::Quantity;

/// Stored recipe as returned by `GET /recipe/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: i64,
    #[serde(rename = "Dish_Name", default, deserialize_with = "null_as_default")]
    pub dish_name: String,
    #[serde(rename = "Ingredients", default, deserialize_with = "null_as_default")]
    pub ingredients: BTreeMap<String, Quantity>,
    #[serde(rename = "Calories", default, deserialize_with = "null_as_default")]
    pub calories: f64,
    /// Minutes
    #[serde(rename = "Prep_Time", default, deserialize_with = "null_as_default")]
    pub prep_time: i64,
    /// Minutes
    #[serde(rename = "Cooking_Time", default, deserialize_with = "null_as_default")]
    pub cooking_time: i64,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Entity for Recipe {
    type Id = i64;

    fn id(&self) -> i64 {
        self.recipe_id
    }
}

/// Body of `POST /recipe`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipe {
    #[serde(rename = "Dish_Name")]
    pub dish_name: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: BTreeMap<String, String>,
    #[serde(rename = "Calories")]
    pub calories: f64,
    #[serde(rename = "Prep_Time")]
    pub prep_time: i64,
    #[serde(rename = "Cooking_Time")]
    pub cooking_time: i64,
    pub price: f64,
}

impl NewRecipe {
    pub fn provisional(&self, recipe_id: i64) -> Recipe {
        Recipe {
            recipe_id,
            dish_name: self.dish_name.clone(),
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, qty)| (name.clone(), Quantity::Text(qty.clone())))
                .collect(),
            calories: self.calories,
            prep_time: self.prep_time,
            cooking_time: self.cooking_time,
            price: Some(self.price),
        }
    }
}

/// AI-suggested dish from `GET /generate-dishes`; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedDish {
    #[serde(rename = "Dish_Name", default, deserialize_with = "null_as_default")]
    pub dish_name: String,
    #[serde(rename = "Ingredients", default, deserialize_with = "null_as_default")]
    pub ingredients: BTreeMap<String, Quantity>,
    #[serde(rename = "Prep_Time", default, deserialize_with = "null_as_default")]
    pub prep_time: f64,
    #[serde(rename = "Cooking_Time", default, deserialize_with = "null_as_default")]
    pub cooking_time: f64,
    #[serde(rename = "Calories", default, deserialize_with = "null_as_default")]
    pub calories: f64,
}
