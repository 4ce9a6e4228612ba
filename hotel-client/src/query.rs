//! Query-string encoding for list requests
//!
//! Two independent stages: filters as `field.operator=value` pairs, then the
//! pagination parameters. Each stage picks `?` or `&` depending on whether
//! the URL already carries a query.

use shared::{FilterModel, QueryCriteria};
use url::form_urlencoded;

use crate::config::PageIndexBase;

fn separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}

/// Append an already-encoded query fragment.
pub fn append_query(url: &str, query: &str) -> String {
    let query = query.trim_start_matches(['?', '&']);
    if query.is_empty() {
        return url.to_string();
    }
    format!("{url}{}{query}", separator(url))
}

/// Append filters in order; the URL comes back untouched when there are none.
pub fn append_filters<'a>(url: &str, filters: impl IntoIterator<Item = &'a FilterModel>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for filter in filters {
        serializer.append_pair(&filter.key(), &filter.value().to_query_value());
    }
    append_query(url, &serializer.finish())
}

/// Append `page`, `size` and, when set, `sort=field,dir`.
///
/// The sort comma is written literally; only the field name is escaped.
pub fn append_pagination(url: &str, criteria: &QueryCriteria, base: PageIndexBase) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new())
        .append_pair("page", &base.wire_index(criteria.page()).to_string())
        .append_pair("size", &criteria.size().to_string())
        .finish();
    if let Some(sort) = criteria.sort() {
        let field: String = form_urlencoded::byte_serialize(sort.field().as_bytes()).collect();
        query.push_str(&format!("&sort={field},{}", sort.direction().as_str()));
    }
    append_query(url, &query)
}

/// Filter stage followed by the pagination stage.
pub fn encode_criteria(url: &str, criteria: &QueryCriteria, base: PageIndexBase) -> String {
    let filtered = append_filters(url, criteria.filters());
    append_pagination(&filtered, criteria, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{FilterSet, Operator, Sort};

    const BASE: &str = "http://localhost:8080/services/hotelms/api/rooms";

    fn pairs(url: &str) -> Vec<(String, String)> {
        url::Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_empty_filters_leave_url_unchanged() {
        assert_eq!(append_filters(BASE, &FilterSet::new()), BASE);
    }

    #[test]
    fn test_filters_keep_order_and_types() {
        let filters = FilterSet::new()
            .with(FilterModel::new("number", Operator::Equals, 101).unwrap())
            .with(FilterModel::new("isSmokingRoom", Operator::Equals, false).unwrap())
            .with(FilterModel::new("price", Operator::GreaterThan, 4.5).unwrap())
            .with(
                FilterModel::new(
                    "checkInDate",
                    Operator::GreaterThanOrEqual,
                    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                )
                .unwrap(),
            )
            .with(FilterModel::new("id", Operator::In, vec![1, 2, 3]).unwrap());

        let url = append_filters(BASE, &filters);
        assert_eq!(
            pairs(&url),
            vec![
                pair("number.equals", "101"),
                pair("isSmokingRoom.equals", "false"),
                pair("price.greaterThan", "4.5"),
                pair("checkInDate.greaterThanOrEqual", "2026-01-05"),
                pair("id.in", "1,2,3"),
            ]
        );
    }

    #[test]
    fn test_free_text_is_encoded() {
        let filters = FilterSet::new()
            .with(FilterModel::new("name", Operator::Contains, "Grand & Co").unwrap());
        let url = append_filters(BASE, &filters);
        assert!(!url.contains("Grand & Co"));
        assert_eq!(pairs(&url), vec![pair("name.contains", "Grand & Co")]);
    }

    #[test]
    fn test_ampersand_when_query_present() {
        let filters = FilterSet::new()
            .with(FilterModel::new("hotel.id", Operator::Equals, 7).unwrap());
        let url = append_filters(&format!("{BASE}?eagerload=true"), &filters);
        assert_eq!(url, format!("{BASE}?eagerload=true&hotel.id.equals=7"));
    }

    #[test]
    fn test_upserted_filter_encodes_once() {
        let mut filters = FilterSet::new();
        filters.upsert(FilterModel::new("number", Operator::Equals, "100").unwrap());
        filters.upsert(FilterModel::new("number", Operator::Equals, "101").unwrap());
        let url = append_filters(BASE, &filters);
        assert_eq!(pairs(&url), vec![pair("number.equals", "101")]);
    }

    #[test]
    fn test_rooms_page_two() {
        let filters = FilterSet::new()
            .with(FilterModel::new("number", Operator::Equals, "101").unwrap());
        let criteria = QueryCriteria::new(2, 6)
            .unwrap()
            .sorted_by(Sort::desc("id").unwrap())
            .with_filters(filters);

        let url = encode_criteria(BASE, &criteria, PageIndexBase::Zero);
        assert_eq!(
            pairs(&url),
            vec![
                pair("number.equals", "101"),
                pair("page", "1"),
                pair("size", "6"),
                pair("sort", "id,desc"),
            ]
        );

        assert!(url.ends_with("&page=1&size=6&sort=id,desc"));

        let url = encode_criteria(BASE, &criteria, PageIndexBase::One);
        assert!(pairs(&url).contains(&pair("page", "2")));
    }

    #[test]
    fn test_pagination_without_sort_or_filters() {
        let criteria = QueryCriteria::new(1, 10).unwrap();
        let url = encode_criteria(BASE, &criteria, PageIndexBase::Zero);
        assert_eq!(url, format!("{BASE}?page=0&size=10"));
    }

    #[test]
    fn test_sort_field_is_escaped_but_comma_is_not() {
        let criteria = QueryCriteria::new(1, 6)
            .unwrap()
            .sorted_by(Sort::asc("hotel.name#x").unwrap());
        let url = append_pagination(BASE, &criteria, PageIndexBase::Zero);
        assert_eq!(url, format!("{BASE}?page=0&size=6&sort=hotel.name%23x,asc"));
        assert!(pairs(&url).contains(&pair("sort", "hotel.name#x,asc")));
    }

    #[test]
    fn test_append_raw_query() {
        assert_eq!(append_query(BASE, ""), BASE);
        assert_eq!(append_query(BASE, "?a=1"), format!("{BASE}?a=1"));
        assert_eq!(append_query(&format!("{BASE}?a=1"), "b=2"), format!("{BASE}?a=1&b=2"));
    }
}
