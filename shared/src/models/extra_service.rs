//! Extra Service Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtraServiceChargeType {
    PerGuestPerNight,
    PerGuest,
    PerUse,
    PerRoomPerNight,
    PerRoom,
    PerBooking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtraServiceType {
    Meal,
    General,
}

/// Chargeable add-on (breakfast, parking, late checkout, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub charge_type: ExtraServiceChargeType,
    #[serde(rename = "type")]
    pub service_type: ExtraServiceType,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl ExtraService {
    /// Case-insensitive match on name or description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
