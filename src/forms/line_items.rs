//! Line Item Rows
//!
//! Ordered name/quantity rows of the order and recipe forms. Each row has an
//! opaque id so rows can be edited and removed regardless of what was typed.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u32);

#[derive(Debug, Clone, PartialEq)]
pub struct LineRow {
    pub id: RowId,
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineItems {
    rows: Vec<LineRow>,
    next_id: u32,
}

/// Rows folded into a name → value map
#[derive(Debug, Clone, PartialEq)]
pub struct Folded<V> {
    pub entries: BTreeMap<String, V>,
    /// Names entered on more than one row; the last row's value was kept
    pub duplicates: Vec<String>,
    /// Rows dropped for a blank name or an unusable quantity
    pub skipped: usize,
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_row() -> Self {
        let mut items = Self::new();
        items.add_row();
        items
    }

    pub fn rows(&self) -> &[LineRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(LineRow { id, name: String::new(), quantity: String::new() });
        id
    }

    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn set_name(&mut self, id: RowId, name: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.name = name;
        }
    }

    pub fn set_quantity(&mut self, id: RowId, quantity: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.quantity = quantity;
        }
    }

    /// Fold rows in order. Names are trimmed; `parse` decides which
    /// quantities are usable. A repeated name keeps the last row's value.
    pub fn fold<V>(&self, parse: impl Fn(&str) -> Option<V>) -> Folded<V> {
        let mut entries = BTreeMap::new();
        let mut duplicates = Vec::new();
        let mut skipped = 0;

        for row in &self.rows {
            let name = row.name.trim();
            let Some(value) = (!name.is_empty()).then(|| parse(&row.quantity)).flatten() else {
                skipped += 1;
                continue;
            };
            if entries.insert(name.to_string(), value).is_some() && !duplicates.iter().any(|d| d == name) {
                duplicates.push(name.to_string());
            }
        }

        Folded { entries, duplicates, skipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> LineItems {
        let mut items = LineItems::new();
        for (name, qty) in pairs {
            let id = items.add_row();
            items.set_name(id, name.to_string());
            items.set_quantity(id, qty.to_string());
        }
        items
    }

    fn positive(raw: &str) -> Option<u32> {
        raw.trim().parse::<u32>().ok().filter(|q| *q > 0)
    }

    #[test]
    fn test_row_ids_stay_stable_across_removal() {
        let mut items = LineItems::with_blank_row();
        let second = items.add_row();
        let third = items.add_row();

        assert!(items.remove_row(second));
        assert!(!items.remove_row(second));
        items.set_name(third, "Pav".into());

        assert_eq!(items.len(), 2);
        assert_eq!(items.rows()[1].id, third);
        assert_eq!(items.rows()[1].name, "Pav");
    }

    #[test]
    fn test_fold_skips_blank_and_invalid_rows() {
        let folded = rows(&[("Vada Pav", "2"), ("", "3"), ("Chai", "0"), ("Poha", "x")]).fold(positive);

        assert_eq!(folded.entries, BTreeMap::from([("Vada Pav".to_string(), 2)]));
        assert_eq!(folded.skipped, 3);
        assert!(folded.duplicates.is_empty());
    }

    #[test]
    fn test_fold_duplicate_names_last_wins() {
        let folded = rows(&[("Chai", "1"), (" Chai ", "4"), ("Chai", "2")]).fold(positive);

        assert_eq!(folded.entries["Chai"], 2);
        assert_eq!(folded.duplicates, vec!["Chai".to_string()]);
    }
}
