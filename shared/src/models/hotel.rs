//! Hotel Model

use serde::{Deserialize, Serialize};

use super::{Amenity, RoomType};
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, Validate, ValidationError,
    validate_required_text,
};

/// Hotel category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotelType {
    Luxury,
    Boutique,
    Resort,
    Business,
    Airport,
    Motel,
    Hostel,
    GuestHouse,
    Apartment,
    Villa,
    Inn,
    Lodge,
    BedAndBreakfast,
    AllInclusive,
    Spa,
    Casino,
    Conference,
    ExtendedStay,
    Capsule,
    Eco,
    FarmStay,
    Heritage,
    Floating,
    Cave,
    Ice,
    Safari,
    Monastery,
    Treehouse,
}

/// Hotel entity with its amenities and offered room types embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub hotel_type: HotelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_key: Option<String>,
    #[serde(default)]
    pub pet_accommodation: bool,
    /// Weekdays the hotel does not accept arrivals
    #[serde(default)]
    pub days_off: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub house: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
}

impl Hotel {
    /// Minimal unsaved hotel; the remaining fields start empty
    pub fn new(name: impl Into<String>, hotel_type: HotelType) -> Self {
        Self {
            id: None,
            name: name.into(),
            hotel_type,
            logo_key: None,
            pet_accommodation: false,
            days_off: Vec::new(),
            address: String::new(),
            postal_code: String::new(),
            country: String::new(),
            state: String::new(),
            district: String::new(),
            house: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            phone_number: String::new(),
            amenities: Vec::new(),
            room_types: Vec::new(),
        }
    }

    /// Add a day off unless it is already listed
    pub fn add_day_off(&mut self, day: impl Into<String>) -> bool {
        let day = day.into();
        if day.trim().is_empty() || self.days_off.contains(&day) {
            return false;
        }
        self.days_off.push(day);
        true
    }

    /// Toggle an amenity by id; returns whether it is now attached
    pub fn toggle_amenity(&mut self, amenity: &Amenity) -> bool {
        if let Some(index) = self.amenities.iter().position(|a| a.id == amenity.id) {
            self.amenities.remove(index);
            false
        } else {
            self.amenities.push(amenity.clone());
            true
        }
    }
}

impl Validate for Hotel {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.address, "address", MAX_ADDRESS_LEN)?;
        validate_required_text(&self.phone_number, "phoneNumber", MAX_SHORT_TEXT_LEN)?;
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::new("latitude", "coordinates out of range"));
        }
        Ok(())
    }
}
