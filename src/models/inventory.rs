//! Inventory Models

use serde::{Deserialize, Serialize};

use super::entity::{null_as_default, Entity};

/// Stock line as returned by `GET /inventory/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "Item_ID")]
    pub item_id: i64,
    #[serde(rename = "Item_Name", default, deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(rename = "Category", default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "Quantity", default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(rename = "Unit", default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(rename = "Price_per_Unit", default, deserialize_with = "null_as_default")]
    pub price_per_unit: f64,
    /// Backend timestamp, e.g. `2025-03-10T00:00:00`
    #[serde(rename = "Expiry_Date", default, deserialize_with = "null_as_default")]
    pub expiry_date: String,
    #[serde(rename = "Storage_Location", default, deserialize_with = "null_as_default")]
    pub storage_location: String,
    #[serde(rename = "Detected_By_AI", default, deserialize_with = "null_as_default")]
    pub detected_by_ai: bool,
    #[serde(rename = "Confidence_Score", default, deserialize_with = "null_as_default")]
    pub confidence_score: f64,
}

impl Entity for InventoryItem {
    type Id = i64;

    fn id(&self) -> i64 {
        self.item_id
    }
}

/// Body of `POST /inventory/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInventoryItem {
    #[serde(rename = "Item_Name")]
    pub item_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Price_per_Unit")]
    pub price_per_unit: f64,
    #[serde(rename = "Expiry_Date")]
    pub expiry_date: String,
    #[serde(rename = "Storage_Location")]
    pub storage_location: String,
    #[serde(rename = "Detected_By_AI")]
    pub detected_by_ai: bool,
    #[serde(rename = "Confidence_Score")]
    pub confidence_score: f64,
}

impl NewInventoryItem {
    /// Row shown locally until the next fetch returns the stored record.
    pub fn provisional(&self, item_id: i64) -> InventoryItem {
        InventoryItem {
            item_id,
            item_name: self.item_name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            price_per_unit: self.price_per_unit,
            expiry_date: self.expiry_date.clone(),
            storage_location: self.storage_location.clone(),
            detected_by_ai: self.detected_by_ai,
            confidence_score: self.confidence_score,
        }
    }
}

/// Body of `PUT /inventory/{id}` (the backend takes whole-number quantities here)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryPatch {
    #[serde(rename = "Item_Name")]
    pub item_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Price_per_Unit")]
    pub price_per_unit: f64,
    #[serde(rename = "Expiry_Date")]
    pub expiry_date: String,
    #[serde(rename = "Storage_Location")]
    pub storage_location: String,
}

impl InventoryPatch {
    pub fn apply_to(&self, item: &mut InventoryItem) {
        item.item_name = self.item_name.clone();
        item.category = self.category.clone();
        item.quantity = self.quantity as f64;
        item.unit = self.unit.clone();
        item.price_per_unit = self.price_per_unit;
        item.expiry_date = self.expiry_date.clone();
        item.storage_location = self.storage_location.clone();
    }
}

/// Distinct non-empty categories in first-seen order
pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Items matching the category filter (`None` = all) and a case-insensitive
/// search over name and category.
pub fn filter_items<'a>(items: &'a [InventoryItem], category: Option<&str>, term: &str) -> Vec<&'a InventoryItem> {
    let term = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .filter(|item| {
            term.is_empty()
                || item.item_name.to_lowercase().contains(&term)
                || item.category.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, name: &str, category: &str) -> InventoryItem {
        InventoryItem {
            item_id: id,
            item_name: name.to_string(),
            category: category.to_string(),
            quantity: 1.0,
            unit: "kg".to_string(),
            price_per_unit: 10.0,
            expiry_date: "2025-03-10T00:00:00".to_string(),
            storage_location: "Shelf".to_string(),
            detected_by_ai: false,
            confidence_score: 0.0,
        }
    }

    #[test]
    fn test_deserialize_backend_row_with_nulls() {
        let json = r#"{"Item_ID":7,"Item_Name":"Potato","Category":null,"Quantity":12.5,
            "Unit":"kg","Price_per_Unit":30.0,"Expiry_Date":"2025-03-10T00:00:00",
            "Storage_Location":null,"Detected_By_AI":null,"Confidence_Score":null}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), 7);
        assert_eq!(item.category, "");
        assert_eq!(item.quantity, 12.5);
        assert!(!item.detected_by_ai);
    }

    #[test]
    fn test_patch_applies_fields() {
        let mut item = make_item(1, "Potato", "Veg");
        let patch = InventoryPatch {
            item_name: "Onion".into(),
            category: "Veg".into(),
            quantity: 4,
            unit: "kg".into(),
            price_per_unit: 25.0,
            expiry_date: "2025-04-01".into(),
            storage_location: "Cold room".into(),
        };
        patch.apply_to(&mut item);
        assert_eq!(item.item_name, "Onion");
        assert_eq!(item.quantity, 4.0);
        assert_eq!(item.item_id, 1);
    }

    #[test]
    fn test_filter_and_categories() {
        let items = vec![
            make_item(1, "Potato", "Veg"),
            make_item(2, "Milk", "Dairy"),
            make_item(3, "Tomato", "Veg"),
        ];
        assert_eq!(categories(&items), vec!["Veg".to_string(), "Dairy".to_string()]);

        let veg: Vec<i64> = filter_items(&items, Some("Veg"), "").iter().map(|i| i.item_id).collect();
        assert_eq!(veg, vec![1, 3]);

        let searched: Vec<i64> = filter_items(&items, None, "  mIl ").iter().map(|i| i.item_id).collect();
        assert_eq!(searched, vec![2]);
    }
}
