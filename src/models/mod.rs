//! Frontend Models
//!
//! Data structures matching backend entities, plus the view models derived
//! from them.

mod entity;
mod quantity;
mod inventory;
mod order;
mod recipe;
mod menu;
mod forecast;
mod food;

pub use entity::{date_part, time_part, Entity};
pub use quantity::Quantity;
pub use inventory::{categories, filter_items, InventoryItem, InventoryPatch, NewInventoryItem};
pub use order::{filter_orders, NewOrder, Order, OrderStatus, StatusFilter};
pub use recipe::{NewRecipe, Recipe, SuggestedDish};
pub use menu::{MenuEntry, MenuItem, EXPIRING_SOON_DAYS, RECOMMENDED_MARGIN};
pub use forecast::{DemandTrend, ForecastEntry, DEFAULT_FORECAST_DAYS, FORECAST_DAY_OPTIONS, HIGH_DEMAND_THRESHOLD};
pub use food::DetectedFood;
