//! Amenity Model

use serde::{Deserialize, Serialize};

use crate::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, Validate, ValidationError, validate_required_text};

/// Hotel amenity (Wi-Fi, parking, pool, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
}

impl Validate for Amenity {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.code, "code", MAX_SHORT_TEXT_LEN)
    }
}
