//! Demand Forecast Models

use serde::{Deserialize, Serialize};

use super::entity::{date_part, null_as_default};

/// Predictions above this quantity are labelled high demand
pub const HIGH_DEMAND_THRESHOLD: f64 = 10.0;

/// Day counts offered by the forecast selector
pub const FORECAST_DAY_OPTIONS: [u32; 7] = [1, 2, 3, 5, 7, 10, 15];
pub const DEFAULT_FORECAST_DAYS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandTrend {
    High,
    Stable,
}

impl DemandTrend {
    pub fn label(&self) -> &'static str {
        match self {
            DemandTrend::High => "High Demand",
            DemandTrend::Stable => "Stable",
        }
    }
}

/// One row of `GET /forecast/{days}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    #[serde(rename = "Date", default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "Item_Name", default, deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(rename = "Predicted_Quantity", default, deserialize_with = "null_as_default")]
    pub predicted_quantity: f64,
}

impl ForecastEntry {
    pub fn trend(&self) -> DemandTrend {
        if self.predicted_quantity > HIGH_DEMAND_THRESHOLD {
            DemandTrend::High
        } else {
            DemandTrend::Stable
        }
    }

    pub fn display_date(&self) -> String {
        date_part(&self.date)
    }
}
