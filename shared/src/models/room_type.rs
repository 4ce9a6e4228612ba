//! Room Type Model

use serde::{Deserialize, Serialize};

use crate::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, Validate, ValidationError, validate_required_text};

/// Room category (single, double, family, ...)
///
/// Bed count and occupancy travel as free text, the way the backend stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub number_beds: String,
    #[serde(default)]
    pub max_occupancy: String,
    #[serde(default)]
    pub is_smoking_room: bool,
}

impl Validate for RoomType {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.number_beds, "numberBeds", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.max_occupancy, "maxOccupancy", MAX_SHORT_TEXT_LEN)
    }
}
