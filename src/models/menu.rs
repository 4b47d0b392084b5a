//! AI Menu Models
//!
//! `GET /menu/` returns dishes that can be cooked from current stock, priced
//! with a margin that shrinks as ingredients near expiry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{date_part, null_as_default};

/// Margin the backend gives dishes with no ingredient close to expiry
pub const RECOMMENDED_MARGIN: &str = "30%";

/// Ingredients expiring within this many days get flagged on the card
pub const EXPIRING_SOON_DAYS: i64 = 5;

/// One row of the `menu` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(rename = "Dish_Name", default, deserialize_with = "null_as_default")]
    pub dish_name: String,
    #[serde(rename = "Earliest_Expiry", default)]
    pub earliest_expiry: Option<String>,
    #[serde(rename = "Total_Cost", default, deserialize_with = "null_as_default")]
    pub total_cost: f64,
    #[serde(rename = "Final_Price", default, deserialize_with = "null_as_default")]
    pub final_price: f64,
    #[serde(rename = "Profit_Margin", default, deserialize_with = "null_as_default")]
    pub profit_margin: String,
}

/// Menu card, rebuilt wholesale on every fetch
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub dish_name: String,
    pub final_price: f64,
    pub total_cost: f64,
    pub profit_margin: String,
    pub earliest_expiry: Option<String>,
    pub expiring_soon: Vec<String>,
    pub recommended: bool,
}

impl MenuItem {
    pub fn from_entry(entry: MenuEntry, today: NaiveDate) -> Self {
        let expiry = entry.earliest_expiry.as_deref().map(date_part);
        let expiring_soon = expiry
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .filter(|d| (*d - today).num_days() <= EXPIRING_SOON_DAYS)
            .map(|d| vec![format!("Expiring {}", d)])
            .unwrap_or_default();

        Self {
            recommended: entry.profit_margin.trim() == RECOMMENDED_MARGIN,
            dish_name: entry.dish_name,
            final_price: entry.final_price,
            total_cost: entry.total_cost,
            profit_margin: entry.profit_margin,
            earliest_expiry: expiry,
            expiring_soon,
        }
    }
}
