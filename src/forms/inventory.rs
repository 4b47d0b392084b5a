//! Inventory Item Draft

use crate::models::{date_part, InventoryItem, InventoryPatch, NewInventoryItem};

use super::{coerce_float, coerce_int, format_number};

pub const UNKNOWN_ITEM: &str = "Unknown Item";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const DEFAULT_UNIT: &str = "pcs";
pub const FAR_FUTURE_EXPIRY: &str = "9999-12-31";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Add/edit form state, one string per input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryDraft {
    pub item_name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub price_per_unit: String,
    pub expiry_date: String,
    pub storage_location: String,
}

fn or_sentinel(raw: &str, sentinel: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        sentinel.to_string()
    } else {
        trimmed.to_string()
    }
}

impl InventoryDraft {
    /// Prefill the edit form from a mirrored row.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            category: item.category.clone(),
            quantity: format_number(item.quantity),
            unit: item.unit.clone(),
            price_per_unit: format_number(item.price_per_unit),
            expiry_date: date_part(&item.expiry_date),
            storage_location: item.storage_location.clone(),
        }
    }

    pub fn to_new_item(&self) -> NewInventoryItem {
        NewInventoryItem {
            item_name: or_sentinel(&self.item_name, UNKNOWN_ITEM),
            category: or_sentinel(&self.category, UNCATEGORIZED),
            quantity: coerce_float(&self.quantity).max(0.0),
            unit: or_sentinel(&self.unit, DEFAULT_UNIT),
            price_per_unit: coerce_float(&self.price_per_unit).max(0.0),
            expiry_date: or_sentinel(&self.expiry_date, FAR_FUTURE_EXPIRY),
            storage_location: or_sentinel(&self.storage_location, UNKNOWN_LOCATION),
            detected_by_ai: false,
            confidence_score: 0.0,
        }
    }

    pub fn to_patch(&self) -> InventoryPatch {
        InventoryPatch {
            item_name: or_sentinel(&self.item_name, UNKNOWN_ITEM),
            category: or_sentinel(&self.category, UNCATEGORIZED),
            quantity: coerce_int(&self.quantity).max(0),
            unit: or_sentinel(&self.unit, DEFAULT_UNIT),
            price_per_unit: coerce_float(&self.price_per_unit).max(0.0),
            expiry_date: or_sentinel(&self.expiry_date, FAR_FUTURE_EXPIRY),
            storage_location: or_sentinel(&self.storage_location, UNKNOWN_LOCATION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only_draft_fills_sentinels() {
        let draft = InventoryDraft { item_name: "Basmati Rice".into(), ..Default::default() };

        let body = serde_json::to_value(draft.to_new_item()).unwrap();
        assert_eq!(body["Item_Name"], "Basmati Rice");
        assert_eq!(body["Category"], "Uncategorized");
        assert_eq!(body["Quantity"], 0.0);
        assert_eq!(body["Unit"], "pcs");
        assert_eq!(body["Price_per_Unit"], 0.0);
        assert_eq!(body["Expiry_Date"], "9999-12-31");
        assert_eq!(body["Storage_Location"], "Unknown Location");
        assert_eq!(body["Detected_By_AI"], false);

        let patch = serde_json::to_value(draft.to_patch()).unwrap();
        assert_eq!(patch["Quantity"], 0);
        assert_eq!(patch["Unit"], "pcs");
    }

    #[test]
    fn test_edit_roundtrip_keeps_values() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"Item_ID":3,"Item_Name":"Paneer","Category":"Dairy","Quantity":12.0,"Unit":"kg",
                "Price_per_Unit":320.5,"Expiry_Date":"2025-03-10T00:00:00","Storage_Location":"Fridge"}"#,
        )
        .unwrap();
        let draft = InventoryDraft::from_item(&item);
        assert_eq!(draft.quantity, "12");
        assert_eq!(draft.expiry_date, "2025-03-10");

        let mut edited = item.clone();
        draft.to_patch().apply_to(&mut edited);
        assert_eq!(edited.quantity, 12.0);
        assert_eq!(edited.price_per_unit, 320.5);
        assert_eq!(edited.expiry_date, "2025-03-10");
    }

    #[test]
    fn test_blank_name_on_edit() {
        let draft = InventoryDraft { item_name: "   ".into(), quantity: "3.7".into(), ..Default::default() };
        let patch = draft.to_patch();
        assert_eq!(patch.item_name, "Unknown Item");
        assert_eq!(patch.quantity, 3);
    }
}
