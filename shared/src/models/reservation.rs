//! Reservation Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Room;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    New,
    Active,
    NotActive,
}

/// Guest account attached to a reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Reservation entity (stay in one room)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub check_in_date: NaiveDate,
    /// Departure day, exclusive: the room is free again that night
    pub check_out_date: NaiveDate,
    pub total_price: Decimal,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ReservationUser>,
    pub room: Room,
}

impl Reservation {
    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}
