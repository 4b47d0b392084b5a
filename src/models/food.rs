//! Food Image Analysis Models

use serde::{Deserialize, Serialize};

use super::quantity::Quantity;

/// An item the recognition model found in an uploaded photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFood {
    pub name: String,
    pub quantity: Quantity,
}
