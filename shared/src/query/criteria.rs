//! Query criteria: page, size, sort and filters for one list request

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{FilterSet, QueryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort specification rendered as `field,direction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    field: String,
    direction: SortDirection,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Result<Self, QueryError> {
        let field = field.into();
        if field.is_empty() || field.contains([',', '&', '=', ' ']) {
            return Err(QueryError::InvalidSort(field));
        }
        Ok(Self { field, direction })
    }

    pub fn asc(field: impl Into<String>) -> Result<Self, QueryError> {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Result<Self, QueryError> {
        Self::new(field, SortDirection::Desc)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction.as_str())
    }
}

impl FromStr for Sort {
    type Err = QueryError;

    /// Parses `id,desc`; a bare field sorts ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, "asc")) => (field, SortDirection::Asc),
            Some((field, "desc")) => (field, SortDirection::Desc),
            Some(_) => return Err(QueryError::InvalidSort(s.to_string())),
            None => (s, SortDirection::Asc),
        };
        Self::new(field, direction).map_err(|_| QueryError::InvalidSort(s.to_string()))
    }
}

/// Pagination, sort and filters for one list request.
///
/// `page` is 1-based here; the encoder converts it to the backend's index
/// base when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCriteria {
    page: u32,
    size: u32,
    sort: Option<Sort>,
    filters: FilterSet,
}

impl QueryCriteria {
    pub fn new(page: u32, size: u32) -> Result<Self, QueryError> {
        if size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        if page == 0 {
            return Err(QueryError::InvalidPage);
        }
        Ok(Self {
            page,
            size,
            sort: None,
            filters: FilterSet::new(),
        })
    }

    pub(super) fn from_valid_parts(page: u32, size: u32) -> Self {
        debug_assert!(page >= 1 && size >= 1);
        Self {
            page,
            size,
            sort: None,
            filters: FilterSet::new(),
        }
    }

    pub fn sorted_by(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }
}
