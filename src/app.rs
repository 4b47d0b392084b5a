//! Kitchen Admin App
//!
//! Sidebar plus the active view. Switching views unmounts the previous one,
//! which cancels its in-flight requests.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{NoticeBanner, Sidebar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{ShellState, ShellStateStoreFields, ViewId};
use crate::views::{
    AiMenuView, DashboardView, FoodAnalysisView, InventoryView, OrdersView, RecipesView, SalesDemandView,
};

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let store = Store::new(ShellState::default());
    provide_context(store);
    provide_context(AppContext::new(ApiClient::new(&config), store));

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="main-column">
                <header class="app-header">
                    <span class="header-title">{move || store.active_view().get().title()}</span>
                    <span class="backend-url muted" title="Backend">{config.base_url.clone()}</span>
                </header>
                <main class="main-content">
                    <NoticeBanner />
                    {move || render_view(store.active_view().get())}
                </main>
            </div>
        </div>
    }
}

fn render_view(view: ViewId) -> AnyView {
    match view {
        ViewId::Dashboard => view! { <DashboardView /> }.into_any(),
        ViewId::Inventory => view! { <InventoryView /> }.into_any(),
        ViewId::Orders => view! { <OrdersView /> }.into_any(),
        ViewId::Recipes => view! { <RecipesView /> }.into_any(),
        ViewId::AiMenu => view! { <AiMenuView /> }.into_any(),
        ViewId::FoodAnalysis => view! { <FoodAnalysisView /> }.into_any(),
        ViewId::SalesDemand => view! { <SalesDemandView /> }.into_any(),
    }
}
