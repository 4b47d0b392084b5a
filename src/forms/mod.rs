//! Form Drafts
//!
//! Editable state of the create/edit forms and its conversion into request
//! bodies. Text inputs are kept as typed; coercion happens on submit.

mod inventory;
mod line_items;
mod order;
mod recipe;
mod upload;

pub use inventory::InventoryDraft;
pub use line_items::{Folded, LineItems, LineRow, RowId};
pub use order::{OrderDraft, OrderSubmission};
pub use recipe::{RecipeDraft, RecipeSubmission};
pub use upload::{ImageUpload, PickGeneration, MAX_IMAGE_BYTES};

/// Parse a whole number, truncating decimals; anything else is 0.
pub fn coerce_int(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        .unwrap_or(0)
}

/// Parse a number; anything unparseable is 0.0.
pub fn coerce_float(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0)
}

/// Format a number for an input field (`12` rather than `12.0`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int("12"), 12);
        assert_eq!(coerce_int(" 7 "), 7);
        assert_eq!(coerce_int("12.9"), 12);
        assert_eq!(coerce_int(""), 0);
        assert_eq!(coerce_int("a dozen"), 0);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_float("2.5"), 2.5);
        assert_eq!(coerce_float(""), 0.0);
        assert_eq!(coerce_float("NaN"), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(0.5), "0.5");
    }
}
