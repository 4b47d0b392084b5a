//! Shell State Store
//!
//! Which view is showing and the current notice, via reactive_stores for
//! field-level reactivity. Per-view data lives in each view's synchronizer.

use leptos::prelude::*;
use reactive_stores::Store;

/// The dashboard sections reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Dashboard,
    Inventory,
    Orders,
    Recipes,
    AiMenu,
    FoodAnalysis,
    SalesDemand,
}

impl ViewId {
    pub const ALL: [ViewId; 7] = [
        ViewId::Dashboard,
        ViewId::Inventory,
        ViewId::Orders,
        ViewId::Recipes,
        ViewId::AiMenu,
        ViewId::FoodAnalysis,
        ViewId::SalesDemand,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Inventory => "Inventory",
            ViewId::Orders => "Orders",
            ViewId::Recipes => "Recipes",
            ViewId::AiMenu => "AI Menu",
            ViewId::FoodAnalysis => "Food Analysis",
            ViewId::SalesDemand => "Sales & Demand",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "📊",
            ViewId::Inventory => "📦",
            ViewId::Orders => "🧾",
            ViewId::Recipes => "📖",
            ViewId::AiMenu => "🍽",
            ViewId::FoodAnalysis => "📷",
            ViewId::SalesDemand => "📈",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Failure,
}

/// Transient message shown above the active view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, text: text.into() }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Failure, text: text.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice success",
            NoticeKind::Warning => "notice warning",
            NoticeKind::Failure => "notice failure",
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    pub active_view: ViewId,
    pub notice: Option<Notice>,
}

pub type ShellStore = Store<ShellState>;

pub fn use_shell_store() -> ShellStore {
    expect_context::<ShellStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch views. The notice belongs to the view it was raised in.
pub fn store_switch_view(store: &ShellStore, view: ViewId) {
    if store.active_view().get_untracked() == view {
        return;
    }
    *store.notice().write() = None;
    *store.active_view().write() = view;
}

pub fn store_notify(store: &ShellStore, notice: Notice) {
    *store.notice().write() = Some(notice);
}

pub fn store_dismiss_notice(store: &ShellStore) {
    *store.notice().write() = None;
}
