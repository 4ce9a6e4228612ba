//! Filter predicates for list queries
//!
//! A [`FilterModel`] is one `field.operator=value` predicate of the backend
//! filter DSL. Models are checked when they are built, so every instance that
//! exists can be encoded without further validation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::QueryError;

/// Comparison applied by a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    DoesNotContain,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    In,
    NotIn,
    Specified,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::Contains,
        Operator::DoesNotContain,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::In,
        Operator::NotIn,
        Operator::Specified,
    ];

    /// Name used in the query key (`name.contains`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::Contains => "contains",
            Self::DoesNotContain => "doesNotContain",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanOrEqual => "greaterThanOrEqual",
            Self::LessThan => "lessThan",
            Self::LessThanOrEqual => "lessThanOrEqual",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Specified => "specified",
        }
    }

    /// Whether this operator can be applied to `value`
    pub fn accepts(self, value: &FilterValue) -> bool {
        match (self, value) {
            (Self::Equals | Self::NotEquals, v) => v.is_scalar(),
            (Self::Contains | Self::DoesNotContain, FilterValue::Text(_)) => true,
            (
                Self::GreaterThan | Self::GreaterThanOrEqual | Self::LessThan | Self::LessThanOrEqual,
                FilterValue::Integer(_) | FilterValue::Number(_) | FilterValue::Date(_),
            ) => true,
            (Self::In | Self::NotIn, FilterValue::List(items)) => is_uniform_scalar_list(items),
            (Self::Specified, FilterValue::Boolean(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| QueryError::UnknownOperator(s.to_string()))
    }
}

/// Declared type of a filter operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Text,
    Number,
    Boolean,
    Date,
    List,
}

/// Typed filter operand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterValue {
    Text(String),
    /// Exact integer, for ids and counts
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    List(Vec<FilterValue>),
}

impl FilterValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Text(_) => ValueType::Text,
            Self::Integer(_) | Self::Number(_) => ValueType::Number,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Date(_) => ValueType::Date,
            Self::List(_) => ValueType::List,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_))
    }

    /// Wire form before URL encoding.
    ///
    /// Booleans render as `true`/`false`, numbers in their shortest decimal
    /// form, dates as ISO dates and lists as comma-joined elements.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::List(items) => items
                .iter()
                .map(FilterValue::to_query_value)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    fn has_non_finite_number(&self) -> bool {
        match self {
            Self::Number(n) => !n.is_finite(),
            Self::List(items) => items.iter().any(FilterValue::has_non_finite_number),
            _ => false,
        }
    }
}

fn is_uniform_scalar_list(items: &[FilterValue]) -> bool {
    let Some(first) = items.first() else {
        return false;
    };
    let expected = first.value_type();
    items
        .iter()
        .all(|item| item.is_scalar() && item.value_type() == expected)
}

/// A `,` inside a list element would split it on the wire
fn has_ambiguous_list_text(value: &FilterValue) -> bool {
    match value {
        FilterValue::List(items) => items
            .iter()
            .any(|item| matches!(item, FilterValue::Text(text) if text.contains(','))),
        _ => false,
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// One query predicate: `field.operator=value`
#[derive(Debug, Clone, PartialEq)]
pub struct FilterModel {
    field: String,
    operator: Operator,
    value: FilterValue,
}

impl FilterModel {
    /// Build a predicate, rejecting malformed field paths and operator/value
    /// combinations the backend cannot interpret.
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<FilterValue>,
    ) -> Result<Self, QueryError> {
        let field = field.into();
        let value = value.into();

        validate_field_path(&field)?;
        if value.has_non_finite_number() {
            return Err(QueryError::NonFiniteNumber(field));
        }
        if has_ambiguous_list_text(&value) {
            return Err(QueryError::AmbiguousListElement(field));
        }
        if !operator.accepts(&value) {
            return Err(QueryError::IncompatibleValue {
                field,
                operator,
                value_type: value.value_type(),
            });
        }

        Ok(Self {
            field,
            operator,
            value,
        })
    }

    /// Build a predicate from a combined key such as `hotel.id.equals`.
    pub fn from_key(key: &str, value: impl Into<FilterValue>) -> Result<Self, QueryError> {
        let (field, operator) = key
            .rsplit_once('.')
            .ok_or_else(|| QueryError::InvalidFieldPath(key.to_string()))?;
        Self::new(field, operator.parse()?, value)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// Query parameter name, unique per field and operator
    pub fn key(&self) -> String {
        format!("{}.{}", self.field, self.operator)
    }

    fn matches(&self, field: &str, operator: Operator) -> bool {
        self.field == field && self.operator == operator
    }
}

fn validate_field_path(path: &str) -> Result<(), QueryError> {
    let valid = !path.is_empty()
        && path.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(())
    } else {
        Err(QueryError::InvalidFieldPath(path.to_string()))
    }
}

/// Ordered set of active filters, unique per field and operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<FilterModel>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a filter, replacing any filter with the same key.
    ///
    /// The replaced filter is removed first and the new one is appended, so
    /// the most recently set filter is always last.
    pub fn upsert(&mut self, filter: FilterModel) {
        self.remove(&filter.field, filter.operator);
        self.filters.push(filter);
    }

    pub fn with(mut self, filter: FilterModel) -> Self {
        self.upsert(filter);
        self
    }

    pub fn remove(&mut self, field: &str, operator: Operator) -> Option<FilterModel> {
        let index = self
            .filters
            .iter()
            .position(|f| f.matches(field, operator))?;
        Some(self.filters.remove(index))
    }

    /// Remove by combined key, e.g. `number.equals`
    pub fn remove_key(&mut self, key: &str) -> Option<FilterModel> {
        let index = self.filters.iter().position(|f| f.key() == key)?;
        Some(self.filters.remove(index))
    }

    pub fn get(&self, field: &str, operator: Operator) -> Option<&FilterModel> {
        self.filters.iter().find(|f| f.matches(field, operator))
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterModel> {
        self.filters.iter()
    }

    pub fn as_slice(&self) -> &[FilterModel] {
        &self.filters
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterModel;
    type IntoIter = std::slice::Iter<'a, FilterModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

impl FromIterator<FilterModel> for FilterSet {
    fn from_iter<I: IntoIterator<Item = FilterModel>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for filter in iter {
            set.upsert(filter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_joins_field_and_operator() {
        let filter = FilterModel::new("hotel.id", Operator::Equals, 3).unwrap();
        assert_eq!(filter.key(), "hotel.id.equals");
    }

    #[test]
    fn test_from_key_splits_on_last_dot() {
        let filter = FilterModel::from_key("hotel.id.equals", "7").unwrap();
        assert_eq!(filter.field(), "hotel.id");
        assert_eq!(filter.operator(), Operator::Equals);
        assert_eq!(filter.value(), &FilterValue::Text("7".into()));

        let err = FilterModel::from_key("name.like", "x").unwrap_err();
        assert_eq!(err, QueryError::UnknownOperator("like".into()));

        assert!(FilterModel::from_key("name", "x").is_err());
    }

    #[test]
    fn test_operator_round_trips_through_str() {
        for op in Operator::ALL {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_rejects_incompatible_values() {
        let err = FilterModel::new("number", Operator::Contains, 101).unwrap_err();
        assert!(matches!(
            err,
            QueryError::IncompatibleValue {
                operator: Operator::Contains,
                value_type: ValueType::Number,
                ..
            }
        ));

        assert!(FilterModel::new("id", Operator::In, 1).is_err());
        assert!(FilterModel::new("id", Operator::In, Vec::<i64>::new()).is_err());
        assert!(FilterModel::new("name", Operator::GreaterThan, "b").is_err());
        assert!(FilterModel::new("email", Operator::Specified, "yes").is_err());
        assert!(FilterModel::new("id", Operator::Equals, vec![1, 2]).is_err());
    }

    #[test]
    fn test_rejects_mixed_lists() {
        let mixed = FilterValue::List(vec![FilterValue::from(1), FilterValue::from("a")]);
        assert!(FilterModel::new("id", Operator::In, mixed).is_err());
    }

    #[test]
    fn test_rejects_non_finite_numbers() {
        let err = FilterModel::new("latitude", Operator::LessThan, f64::NAN).unwrap_err();
        assert_eq!(err, QueryError::NonFiniteNumber("latitude".into()));
    }

    #[test]
    fn test_rejects_malformed_field_paths() {
        for path in ["", "hotel.", ".id", "hotel..id", "name&x", "first name"] {
            assert!(
                FilterModel::new(path, Operator::Equals, "x").is_err(),
                "{path:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_supported_combinations() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert!(FilterModel::new("name", Operator::Contains, "Grand").is_ok());
        assert!(FilterModel::new("checkInDate", Operator::GreaterThanOrEqual, date).is_ok());
        assert!(FilterModel::new("id", Operator::NotIn, vec![1, 2, 3]).is_ok());
        assert!(FilterModel::new("email", Operator::Specified, true).is_ok());
        assert!(FilterModel::new("isActive", Operator::Equals, false).is_ok());
    }

    #[test]
    fn test_query_values() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(FilterValue::from(101).to_query_value(), "101");
        assert_eq!(FilterValue::from(4.5).to_query_value(), "4.5");
        assert_eq!(FilterValue::from(true).to_query_value(), "true");
        assert_eq!(FilterValue::from(date).to_query_value(), "2026-01-05");
        assert_eq!(FilterValue::from(vec![1, 2, 3]).to_query_value(), "1,2,3");
    }

    #[test]
    fn test_large_ids_are_exact() {
        let filter = FilterModel::new("id", Operator::Equals, 9_007_199_254_740_993_i64).unwrap();
        assert_eq!(filter.value(), &FilterValue::Integer(9_007_199_254_740_993));
        assert_eq!(filter.value().to_query_value(), "9007199254740993");

        let list = FilterValue::from(vec![i64::MAX, -1]);
        assert_eq!(list.to_query_value(), "9223372036854775807,-1");
    }

    #[test]
    fn test_integers_and_decimals_compare_alike() {
        assert!(FilterModel::new("totalPrice", Operator::GreaterThan, 100).is_ok());
        let mixed = FilterValue::List(vec![FilterValue::from(1), FilterValue::from(2.5)]);
        assert!(FilterModel::new("rate", Operator::In, mixed).is_ok());
    }

    #[test]
    fn test_rejects_commas_inside_list_text() {
        let err = FilterModel::new("name", Operator::In, vec!["Smith, John", "Doe"]).unwrap_err();
        assert_eq!(err, QueryError::AmbiguousListElement("name".into()));

        // a single value may carry commas
        let filter = FilterModel::new("name", Operator::Equals, "Smith, John").unwrap();
        assert_eq!(filter.value().to_query_value(), "Smith, John");

        let names = FilterModel::new("name", Operator::In, vec!["Smith", "Doe"]).unwrap();
        assert_eq!(names.value().to_query_value(), "Smith,Doe");
    }

    #[test]
    fn test_upsert_replaces_and_moves_to_end() {
        let mut set = FilterSet::new();
        set.upsert(FilterModel::new("number", Operator::Equals, "101").unwrap());
        set.upsert(FilterModel::new("hotel.id", Operator::Equals, "2").unwrap());
        set.upsert(FilterModel::new("number", Operator::Equals, "102").unwrap());

        assert_eq!(set.len(), 2);
        let keys: Vec<_> = set.iter().map(FilterModel::key).collect();
        assert_eq!(keys, ["hotel.id.equals", "number.equals"]);
        assert_eq!(
            set.get("number", Operator::Equals).unwrap().value(),
            &FilterValue::Text("102".into())
        );
    }

    #[test]
    fn test_same_field_different_operator_coexist() {
        let set: FilterSet = [
            FilterModel::new("totalPrice", Operator::GreaterThan, 100).unwrap(),
            FilterModel::new("totalPrice", Operator::LessThan, 500).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_key() {
        let mut set = FilterSet::new()
            .with(FilterModel::new("name", Operator::Contains, "sea").unwrap());
        assert!(set.remove_key("name.equals").is_none());
        assert!(set.remove_key("name.contains").is_some());
        assert!(set.is_empty());
    }
}
