//! Dashboard Views
//!
//! One component per sidebar section. Each view that shows remote data owns
//! its synchronizers; they are created when the view mounts and torn down
//! when the user navigates away.

mod ai_menu;
mod dashboard;
mod food_analysis;
mod inventory;
mod orders;
mod recipes;
mod sales_demand;

pub use ai_menu::AiMenuView;
pub use dashboard::DashboardView;
pub use food_analysis::FoodAnalysisView;
pub use inventory::InventoryView;
pub use orders::OrdersView;
pub use recipes::RecipesView;
pub use sales_demand::SalesDemandView;
