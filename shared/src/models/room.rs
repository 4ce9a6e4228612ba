//! Room Model

use serde::{Deserialize, Serialize};

use super::{Hotel, RoomType};
use crate::validation::{Validate, ValidationError};

/// Room entity; embeds its hotel and room type in full
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub number: i32,
    pub hotel: Hotel,
    #[serde(rename = "type")]
    pub room_type: RoomType,
}

impl Validate for Room {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.number <= 0 {
            return Err(ValidationError::new("number", "must be positive"));
        }
        if self.hotel.id.is_none() {
            return Err(ValidationError::new("hotel", "must reference a saved hotel"));
        }
        if self.room_type.id.is_none() {
            return Err(ValidationError::new("type", "must reference a saved room type"));
        }
        Ok(())
    }
}
