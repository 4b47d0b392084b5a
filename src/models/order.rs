//! Customer Order Models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::{null_as_default, Entity};
use super::quantity::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub const SELECTABLE: [OrderStatus; 3] = [OrderStatus::Pending, OrderStatus::Processing, OrderStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s {
            "Processing" => OrderStatus::Processing,
            "Completed" => OrderStatus::Completed,
            "Pending" => OrderStatus::Pending,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "status-badge completed",
            OrderStatus::Processing => "status-badge processing",
            _ => "status-badge pending",
        }
    }
}

/// Order as returned by `GET /customer-order/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "Order_ID")]
    pub order_id: i64,
    #[serde(rename = "Customer_ID", default, deserialize_with = "null_as_default")]
    pub customer_id: i64,
    #[serde(rename = "Date_Time", default, deserialize_with = "null_as_default")]
    pub date_time: String,
    #[serde(rename = "Items_Ordered", default, deserialize_with = "null_as_default")]
    pub items_ordered: BTreeMap<String, Quantity>,
    #[serde(rename = "Total_Bill", default, deserialize_with = "null_as_default")]
    pub total_bill: f64,
    #[serde(rename = "Order_Status", default, deserialize_with = "null_as_default")]
    pub order_status: OrderStatus,
}

impl Entity for Order {
    type Id = i64;

    fn id(&self) -> i64 {
        self.order_id
    }
}

/// Body of `POST /customer-order/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    #[serde(rename = "Customer_ID")]
    pub customer_id: i64,
    #[serde(rename = "Date_Time")]
    pub date_time: String,
    #[serde(rename = "Items_Ordered")]
    pub items_ordered: BTreeMap<String, u32>,
    #[serde(rename = "Total_Bill")]
    pub total_bill: f64,
    #[serde(rename = "Order_Status")]
    pub order_status: OrderStatus,
}

/// Status filter of the orders view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Orders",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Self {
        match OrderStatus::from_label(label) {
            OrderStatus::Unknown => StatusFilter::All,
            status => StatusFilter::Only(status),
        }
    }

    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(OrderStatus::SELECTABLE.into_iter().map(StatusFilter::Only))
            .collect()
    }
}

/// Orders matching the status filter whose id or line-item names contain `term`
/// (case-insensitive).
pub fn filter_orders<'a>(orders: &'a [Order], filter: StatusFilter, term: &str) -> Vec<&'a Order> {
    let term = term.trim().to_lowercase();
    orders
        .iter()
        .filter(|order| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.order_status == status,
        })
        .filter(|order| {
            term.is_empty()
                || order.order_id.to_string().contains(&term)
                || order.items_ordered.keys().any(|name| name.to_lowercase().contains(&term))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order(id: i64, status: OrderStatus, items: &[(&str, f64)]) -> Order {
        Order {
            order_id: id,
            customer_id: 5,
            date_time: "2025-03-01T12:30:00".into(),
            items_ordered: items.iter().map(|(n, q)| (n.to_string(), Quantity::Count(*q))).collect(),
            total_bill: 120.0,
            order_status: status,
        }
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let json = r#"{"Order_ID":3,"Customer_ID":9,"Date_Time":"2025-03-01T12:30:00",
            "Items_Ordered":{"Vada Pav":2},"Total_Bill":60.0,"Order_Status":"Cancelled"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_status, OrderStatus::Unknown);
        assert_eq!(order.items_ordered["Vada Pav"].to_string(), "2");
    }

    #[test]
    fn test_filter_by_status_and_term() {
        let orders = vec![
            make_order(101, OrderStatus::Pending, &[("Vada Pav", 2.0)]),
            make_order(102, OrderStatus::Completed, &[("Missal", 1.0)]),
            make_order(203, OrderStatus::Pending, &[("Missal", 3.0)]),
        ];

        let pending: Vec<i64> = filter_orders(&orders, StatusFilter::Only(OrderStatus::Pending), "")
            .iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(pending, vec![101, 203]);

        let missal: Vec<i64> = filter_orders(&orders, StatusFilter::All, "MISSAL").iter().map(|o| o.order_id).collect();
        assert_eq!(missal, vec![102, 203]);

        let by_id: Vec<i64> = filter_orders(&orders, StatusFilter::All, "10").iter().map(|o| o.order_id).collect();
        assert_eq!(by_id, vec![101, 102]);
    }

    #[test]
    fn test_status_filter_labels_round_trip() {
        for filter in StatusFilter::options() {
            assert_eq!(StatusFilter::from_label(filter.label()), filter);
        }
    }

    #[test]
    fn test_status_from_label() {
        for status in OrderStatus::SELECTABLE {
            assert_eq!(OrderStatus::from_label(status.as_str()), status);
        }
        assert_eq!(OrderStatus::from_label("Cancelled"), OrderStatus::Unknown);
    }
}
