//! Entity Trait
//!
//! Contract for backend records that the dashboard mirrors by id.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// A backend record with a stable unique identifier
pub trait Entity: Clone + Send + Sync + 'static {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::fmt::Debug + Send + Sync + 'static;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Deserialize `null` (nullable SQL columns) as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Date part (`YYYY-MM-DD`) of a backend timestamp, or the raw text when it
/// is not a recognised date.
pub fn date_part(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.to_string();
    }
    raw.to_string()
}

/// `HH:MM` of a backend timestamp, if it has one.
pub fn time_part(raw: &str) -> Option<String> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| chrono::DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
        .map(|dt| dt.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-03-10T00:00:00"), "2025-03-10");
        assert_eq!(date_part("2025-03-10T08:15:00.123"), "2025-03-10");
        assert_eq!(date_part("2025-03-10T08:15:00Z"), "2025-03-10");
        assert_eq!(date_part("9999-12-31"), "9999-12-31");
        assert_eq!(date_part("soon"), "soon");
    }

    #[test]
    fn test_time_part() {
        assert_eq!(time_part("2025-03-10T08:15:42"), Some("08:15".to_string()));
        assert_eq!(time_part("2025-03-10"), None);
    }
}
