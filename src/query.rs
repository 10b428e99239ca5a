//! Query-string codec for the criteria set.
//!
//! One query key per field. Parsing never validates values; serialization
//! writes only non-default values, in a fixed key order, so equal criteria
//! always produce byte-identical query strings (the synchronizer relies on
//! that to detect "nothing to write").

use url::form_urlencoded;

use crate::criteria::{Criteria, Field, FIELD_ORDER};

/// Parse a query string (with or without a leading '?') into a criteria set.
/// Missing keys yield defaults, the first occurrence of a duplicated key wins,
/// unrecognized keys are ignored.
pub fn parse_query(query: &str) -> Criteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut criteria = Criteria::default();
    let mut seen = Vec::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if let Some(field) = Field::from_query_key(&key) {
            if seen.contains(&field) {
                continue;
            }
            seen.push(field);
            criteria.set(field, value.into_owned());
        }
    }
    criteria
}

/// Serialize a criteria set to a query string without the leading '?'.
/// All-default criteria serialize to the empty string.
pub fn serialize_query(criteria: &Criteria) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for field in FIELD_ORDER {
        let value = criteria.get(field);
        if value != field.default_value() {
            serializer.append_pair(field.query_key(), value);
        }
    }
    serializer.finish()
}

/// Full listing URL: the bare path when nothing deviates from the defaults.
pub fn listing_url(listing_path: &str, criteria: &Criteria) -> String {
    let query = serialize_query(criteria);
    if query.is_empty() {
        listing_path.to_string()
    } else {
        format!("{}?{}", listing_path, query)
    }
}
