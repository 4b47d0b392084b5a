//! Line Quantities
//!
//! Values of the name → quantity maps the backend stores as free-form JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A quantity as stored by the backend: a number for order lines,
/// usually text (`"500g"`, `"2 medium"`) for recipe ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(f64),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Quantity::Count(n) => write!(f, "{}", n),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_mixed_map_deserializes() {
        let map: BTreeMap<String, Quantity> =
            serde_json::from_str(r#"{"Potato":"500g","Pav Buns":8,"Oil":0.5}"#).unwrap();
        assert_eq!(map["Potato"], Quantity::Text("500g".into()));
        assert_eq!(map["Pav Buns"].to_string(), "8");
        assert_eq!(map["Oil"].to_string(), "0.5");
    }
}
