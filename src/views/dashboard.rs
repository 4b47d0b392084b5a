//! Dashboard View
//!
//! Overview cards with illustrative figures; nothing here is fetched.

use leptos::prelude::*;

use crate::models::OrderStatus;

struct StatCard {
    title: &'static str,
    value: &'static str,
    /// Percent change since yesterday; 0 hides the trend
    trend: f64,
}

struct ExpiringItem {
    name: &'static str,
    quantity: &'static str,
    expires_in: &'static str,
}

struct RecentOrder {
    id: &'static str,
    customer: &'static str,
    items: &'static str,
    status: OrderStatus,
}

const STATS: [StatCard; 4] = [
    StatCard { title: "Today's Revenue", value: "₹24,500", trend: 12.5 },
    StatCard { title: "Total Orders", value: "156", trend: 8.2 },
    StatCard { title: "Inventory Items", value: "89", trend: -2.4 },
    StatCard { title: "Pending Orders", value: "23", trend: 0.0 },
];

const EXPIRING: [ExpiringItem; 3] = [
    ExpiringItem { name: "Tomatoes", quantity: "5 kg", expires_in: "2 days" },
    ExpiringItem { name: "Bread", quantity: "10 pcs", expires_in: "1 day" },
    ExpiringItem { name: "Milk", quantity: "8 L", expires_in: "3 days" },
];

const RECENT_ORDERS: [RecentOrder; 3] = [
    RecentOrder { id: "#ORD001", customer: "Table 5", items: "Vada Pav (2), Missal (1)", status: OrderStatus::Pending },
    RecentOrder { id: "#ORD002", customer: "Table 8", items: "Missal (2)", status: OrderStatus::Completed },
    RecentOrder { id: "#ORD003", customer: "Table 3", items: "Vada Pav (4)", status: OrderStatus::Processing },
];

fn stat_card(stat: &StatCard) -> impl IntoView {
    let trend = (stat.trend != 0.0).then(|| {
        let (class, arrow) = if stat.trend > 0.0 { ("stat-trend up", "▲") } else { ("stat-trend down", "▼") };
        view! { <span class=class>{arrow} " " {format!("{}%", stat.trend.abs())}</span> }
    });
    view! {
        <div class="stat-card">
            <span class="stat-title">{stat.title}</span>
            <div class="stat-row">
                <span class="stat-value">{stat.value}</span>
                {trend}
            </div>
        </div>
    }
}

#[component]
pub fn DashboardView() -> impl IntoView {
    view! {
        <section class="view dashboard-view">
            <div class="view-header">
                <h1 class="view-title">"Dashboard Overview"</h1>
            </div>
            <div class="stat-grid">
                {STATS.iter().map(stat_card).collect_view()}
            </div>
            <div class="dashboard-panels">
                <div class="panel">
                    <h2>"Expiring Items" <span class="warning">" ⚠"</span></h2>
                    <ul class="panel-list">
                        {EXPIRING.iter().map(|item| view! {
                            <li>
                                <div>
                                    <p class="strong">{item.name}</p>
                                    <p class="muted">{item.quantity}</p>
                                </div>
                                <span class="warning">"Expires in " {item.expires_in}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
                <div class="panel">
                    <h2>"Recent Orders"</h2>
                    <ul class="panel-list">
                        {RECENT_ORDERS.iter().map(|order| view! {
                            <li>
                                <div>
                                    <p class="strong">{order.id}</p>
                                    <p class="muted">{order.items}</p>
                                    <p class="muted small">{order.customer}</p>
                                </div>
                                <span class=order.status.badge_class()>{order.status.as_str()}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
