//! List query types
//!
//! Filters, sort and pagination for the collection endpoints, plus the
//! pagination state a list screen keeps between requests.

pub mod criteria;
pub mod filter;
pub mod page;

pub use criteria::{QueryCriteria, Sort, SortDirection};
pub use filter::{FilterModel, FilterSet, FilterValue, Operator, ValueType};
pub use page::{Page, Pager};

use thiserror::Error;

/// Malformed query input, detected before any request is built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Invalid field path: {0:?}")]
    InvalidFieldPath(String),

    #[error("Unknown filter operator: {0}")]
    UnknownOperator(String),

    #[error("Operator {operator} cannot filter {field} by a {value_type:?} value")]
    IncompatibleValue {
        field: String,
        operator: Operator,
        value_type: ValueType,
    },

    #[error("Filter on {0} has a non-finite number")]
    NonFiniteNumber(String),

    #[error("List filter on {0} has a text element containing a comma")]
    AmbiguousListElement(String),

    #[error("Page size must be positive")]
    InvalidPageSize,

    #[error("Page number must be at least 1")]
    InvalidPage,

    #[error("Invalid sort specification: {0:?}")]
    InvalidSort(String),
}
