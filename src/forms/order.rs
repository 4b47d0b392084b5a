//! New Order Draft

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DraftError;
use crate::models::{NewOrder, OrderStatus};

use super::{coerce_float, coerce_int, LineItems};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_id: String,
    pub rows: LineItems,
    pub total_bill: String,
    pub status: OrderStatus,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            rows: LineItems::with_blank_row(),
            total_bill: String::new(),
            status: OrderStatus::Pending,
        }
    }
}

/// A validated order ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub order: NewOrder,
    /// Item names entered on several rows (last quantity kept)
    pub duplicates: Vec<String>,
}

impl OrderDraft {
    /// Validate the rows and build the request body, stamped with `now`.
    pub fn submit(&self, now: DateTime<Utc>) -> Result<OrderSubmission, DraftError> {
        if self.rows.rows().iter().all(|row| row.name.trim().is_empty()) {
            return Err(DraftError::NoItems);
        }
        let folded = self.rows.fold(|raw| u32::try_from(coerce_int(raw)).ok().filter(|q| *q > 0));
        if folded.entries.is_empty() {
            return Err(DraftError::NoValidItems);
        }

        Ok(OrderSubmission {
            order: NewOrder {
                customer_id: coerce_int(&self.customer_id),
                date_time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                items_ordered: folded.entries,
                total_bill: coerce_float(&self.total_bill).max(0.0),
                order_status: self.status,
            },
            duplicates: folded.duplicates,
        })
    }
}
