//! UI Components
//!
//! Reusable Leptos components shared by the views.

mod delete_confirm_button;
mod field;
mod line_items_editor;
mod load_state;
mod notice_banner;
mod sidebar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use field::{bind_setter, bind_text, Field};
pub use line_items_editor::{LineEdit, LineItemsEditor};
pub use load_state::LoadState;
pub use notice_banner::NoticeBanner;
pub use sidebar::Sidebar;
