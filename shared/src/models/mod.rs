//! Data models
//!
//! Mirror the backend DTOs in camelCase JSON. All ids are `Option<i64>`:
//! `None` marks a record that has not been saved and is left out of the
//! serialized body. Related records are embedded, not referenced by key.

pub mod amenity;
pub mod cancellation_policy;
pub mod company;
pub mod currency;
pub mod extra_service;
pub mod hotel;
pub mod rate_plan;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod user;

// Re-exports
pub use amenity::*;
pub use cancellation_policy::*;
pub use company::*;
pub use currency::*;
pub use extra_service::*;
pub use hotel::*;
pub use rate_plan::*;
pub use reservation::*;
pub use room::*;
pub use room_type::*;
pub use user::*;

crate::entity::impl_entity!(
    Amenity,
    CancellationPolicy,
    Company,
    Currency,
    ExtraService,
    Hotel,
    RatePlan,
    Reservation,
    Role,
    Room,
    RoomType,
    Tenant,
    User,
);
