//! Value and property comparison.
//!
//! [`compare_value`] decides whether a single value matches the query under
//! the active options. [`compare_property`] first picks the value to compare
//! out of an element, either by direct key lookup or by dot-path resolution.

use crate::options::SearchOptions;
use crate::path::resolve_path;
use crate::value::Value;

/// Returns `true` if `value` matches `query`.
///
/// `null` and `undefined` values never match, whatever the query. Otherwise
/// the comparison is delegated to the strategy of the configured mode; with
/// no mode every comparison is a non-match.
///
/// ```
/// use seekr::{compare_value, SearchOptions, Value};
///
/// let options = SearchOptions::exact();
/// assert!(compare_value(&Value::from("Foo"), &Value::from("foo"), options));
/// assert!(!compare_value(&Value::from("Foo"), &Value::from("foo"), options.case_sensitive(true)));
/// assert!(!compare_value(&Value::Null, &Value::Null, options));
/// ```
pub fn compare_value(value: &Value, query: &Value, options: SearchOptions) -> bool {
    if value.is_nullish() {
        return false;
    }

    match options.mode {
        Some(mode) => (mode.comparator())(value, query, options),
        None => false,
    }
}

/// Returns `true` if the selected property of `item` matches `query`.
///
/// With `deep` enabled and a dot in `property`, the property is resolved as
/// a nested path. Otherwise it is a single key, so `"a.b"` addresses a key
/// literally named `a.b`. Items without the property never match.
pub fn compare_property(
    item: &Value,
    property: &str,
    query: &Value,
    options: SearchOptions,
) -> bool {
    let selected = if options.deep && property.contains('.') {
        resolve_path(item, property)
    } else {
        item.get(property)
    };

    match selected {
        Some(value) => compare_value(&value, query, options),
        None => false,
    }
}

/// Exact-mode strategy.
///
/// Two strings are compared case-folded unless `case_sensitive` is set.
/// Any other pair falls back to [`Value::strict_equals`].
pub(crate) fn exact(value: &Value, query: &Value, options: SearchOptions) -> bool {
    match (value, query) {
        (Value::String(value), Value::String(query)) => {
            if options.case_sensitive {
                value == query
            } else {
                value.to_lowercase() == query.to_lowercase()
            }
        }
        _ => value.strict_equals(query),
    }
}
