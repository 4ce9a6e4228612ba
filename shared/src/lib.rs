//! Shared types for the hotel console
//!
//! Entity models, list query types, form validation and the calendar
//! layout. Pure data and logic; the HTTP side lives in `hotel-client`.

pub mod calendar;
pub mod entity;
pub mod models;
pub mod query;
pub mod validation;

// Re-exports
pub use entity::Entity;
pub use query::{
    FilterModel, FilterSet, FilterValue, Operator, Page, Pager, QueryCriteria, QueryError, Sort,
    SortDirection, ValueType,
};
pub use validation::{Validate, ValidationError};
