//! Search engine and dispatcher.
//!
//! A [`Seeker`] borrows the data it searches, classifies it once at
//! construction, and routes every search through a fixed table keyed by that
//! classification. Only arrays have a search strategy.

use tracing::{debug, trace};

use crate::compare::{compare_property, compare_value};
use crate::data_type::{classify, validate, DataType};
use crate::error::{ConstructionError, Result, SearchError};
use crate::options::SearchOptions;
use crate::value::Value;

/// Query engine over a borrowed value.
///
/// # Example
///
/// ```
/// use seekr::{SearchOptions, Seeker, Value};
///
/// let users = Value::array([
///     Value::object([("user", Value::object([("name", "Ann")]))]),
///     Value::object([("user", Value::Null)]),
/// ]);
///
/// let seeker = Seeker::new(&users).unwrap();
/// let found = seeker
///     .search("ann", Some("user.name"), SearchOptions::exact().deep(true))
///     .unwrap();
///
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Seeker<'a> {
    data: &'a Value,
    data_type: DataType,
}

impl<'a> Seeker<'a> {
    /// Creates an engine over `data`.
    ///
    /// Fails if the data is `undefined` or of an unrecognized runtime type.
    /// `null` is accepted here and rejected by [`Seeker::search`].
    pub fn new(data: &'a Value) -> std::result::Result<Self, ConstructionError> {
        let data_type = classify(data);
        if let Err(err) = validate(data_type, data) {
            debug!(%data_type, error = %err, "rejected unsearchable data");
            return Err(err);
        }

        debug!(%data_type, "created seeker");
        Ok(Seeker { data, data_type })
    }

    /// Returns the classification computed at construction.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the data this engine searches.
    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// Searches the data for elements matching `query`.
    ///
    /// With a `property`, each element's property (or nested path, when
    /// `deep` is set) is compared; with `None` the element itself is. Matches
    /// come back in their original order, duplicates included.
    ///
    /// An empty-string, `null` or `undefined` query returns an empty result
    /// without looking at the data. Otherwise data that is not an array is
    /// an error.
    pub fn search(
        &self,
        query: impl Into<Value>,
        property: Option<&str>,
        options: SearchOptions,
    ) -> std::result::Result<Vec<&'a Value>, SearchError> {
        let query = query.into();
        if is_trivial(&query) {
            trace!("trivial query, skipping scan");
            return Ok(Vec::new());
        }

        match self.data_type {
            DataType::Array => Ok(self.search_array(&query, property, options)),
            DataType::Null => Err(self.reject(SearchError::NullData)),
            DataType::Undefined => Err(self.reject(SearchError::UndefinedData)),
            DataType::String
            | DataType::Boolean
            | DataType::Number
            | DataType::Map
            | DataType::Set
            | DataType::Object
            | DataType::Symbol
            | DataType::Function
            | DataType::BigInt
            | DataType::Unknown => Err(self.reject(SearchError::UnsupportedType(self.data_type))),
        }
    }

    /// Like [`Seeker::search`], returning owned values.
    pub fn search_cloned(
        &self,
        query: impl Into<Value>,
        property: Option<&str>,
        options: SearchOptions,
    ) -> std::result::Result<Vec<Value>, SearchError> {
        Ok(self
            .search(query, property, options)?
            .into_iter()
            .cloned()
            .collect())
    }

    fn search_array(
        &self,
        query: &Value,
        property: Option<&str>,
        options: SearchOptions,
    ) -> Vec<&'a Value> {
        let items = self.data.as_array().unwrap_or_default();
        let matches: Vec<&'a Value> = items
            .iter()
            .filter(|item| match property {
                Some(property) => compare_property(item, property, query, options),
                None => compare_value(item, query, options),
            })
            .collect();

        trace!(
            scanned = items.len(),
            matched = matches.len(),
            property,
            ?options,
            "searched array"
        );
        matches
    }

    fn reject(&self, err: SearchError) -> SearchError {
        debug!(data_type = %self.data_type, error = %err, "rejected search");
        err
    }
}

fn is_trivial(query: &Value) -> bool {
    match query {
        Value::Undefined | Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Builds an engine over `data` and runs a single search.
///
/// ```
/// use seekr::{seek, SearchOptions, Value};
///
/// let words = Value::array(["Foo", "bar", "FOO"]);
/// let found = seek(&words, "foo", None, SearchOptions::exact()).unwrap();
///
/// assert_eq!(found, vec![&Value::from("Foo"), &Value::from("FOO")]);
/// ```
pub fn seek<'a>(
    data: &'a Value,
    query: impl Into<Value>,
    property: Option<&str>,
    options: SearchOptions,
) -> Result<Vec<&'a Value>> {
    Ok(Seeker::new(data)?.search(query, property, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeekerError;
    use crate::value::{Foreign, Function};

    fn words() -> Value {
        Value::array(["Foo", "bar", "foo", "Bar", "foo"])
    }

    #[test]
    fn caches_data_type() {
        let data = words();
        let seeker = Seeker::new(&data).unwrap();
        assert_eq!(seeker.data_type(), DataType::Array);
        assert!(std::ptr::eq(seeker.data(), &data));
    }

    #[test]
    fn construction_rejects_undefined() {
        let err = Seeker::new(&Value::Undefined).unwrap_err();
        assert_eq!(err, ConstructionError::UndefinedData);
    }

    #[test]
    fn construction_rejects_unknown() {
        let data = Value::from(Foreign::new("WeakRef"));
        let err = Seeker::new(&data).unwrap_err();
        assert_eq!(err, ConstructionError::UnknownType("WeakRef".to_string()));
    }

    #[test]
    fn null_is_rejected_at_search_time() {
        let data = Value::Null;
        let seeker = Seeker::new(&data).unwrap();
        assert_eq!(seeker.data_type(), DataType::Null);

        let err = seeker
            .search("x", None, SearchOptions::exact())
            .unwrap_err();
        assert_eq!(err, SearchError::NullData);
    }

    #[test]
    fn unsupported_types_are_rejected() {
        let cases = [
            Value::from("text"),
            Value::from(1),
            Value::from(true),
            Value::object([("a", 1)]),
            Value::from(Function::new("f")),
            Value::from(9i128),
            Value::set([1]),
        ];

        for data in &cases {
            let seeker = Seeker::new(data).unwrap();
            let err = seeker
                .search("x", None, SearchOptions::exact())
                .unwrap_err();
            assert_eq!(err, SearchError::UnsupportedType(classify(data)));
        }
    }

    #[test]
    fn trivial_queries_short_circuit() {
        let data = words();
        let seeker = Seeker::new(&data).unwrap();
        let options = SearchOptions::exact();

        assert!(seeker.search("", None, options).unwrap().is_empty());
        assert!(seeker.search(Value::Null, None, options).unwrap().is_empty());
        assert!(seeker
            .search(Value::Undefined, None, options)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn trivial_query_wins_over_null_data() {
        let data = Value::Null;
        let seeker = Seeker::new(&data).unwrap();
        assert!(seeker
            .search("", None, SearchOptions::exact())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn whole_element_search_keeps_order_and_duplicates() {
        let data = words();
        let seeker = Seeker::new(&data).unwrap();

        let found = seeker.search("foo", None, SearchOptions::exact()).unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|v| v.as_str().unwrap().eq_ignore_ascii_case("foo")));
        assert_eq!(found[0], &Value::from("Foo"));

        let found = seeker
            .search("foo", None, SearchOptions::exact().case_sensitive(true))
            .unwrap();
        assert_eq!(found, vec![&Value::from("foo"), &Value::from("foo")]);
    }

    #[test]
    fn property_search() {
        let data = Value::array([
            Value::object([("id", Value::from(1)), ("role", Value::from("admin"))]),
            Value::object([("id", Value::from(2)), ("role", Value::from("user"))]),
            Value::Null,
            Value::from(7),
            Value::object([("id", Value::from(3)), ("role", Value::from("Admin"))]),
        ]);
        let seeker = Seeker::new(&data).unwrap();

        let found = seeker
            .search("admin", Some("role"), SearchOptions::exact())
            .unwrap();
        let ids: Vec<_> = found
            .iter()
            .filter_map(|v| v.get("id").and_then(|id| id.as_f64()))
            .collect();
        assert_eq!(ids, vec![1.0, 3.0]);
    }

    #[test]
    fn no_mode_finds_nothing() {
        let data = words();
        let seeker = Seeker::new(&data).unwrap();
        assert!(seeker
            .search("foo", None, SearchOptions::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn cloned_results() {
        let data = words();
        let seeker = Seeker::new(&data).unwrap();
        let found = seeker
            .search_cloned("BAR", None, SearchOptions::exact())
            .unwrap();
        assert_eq!(found, vec![Value::from("bar"), Value::from("Bar")]);
    }

    #[test]
    fn seek_wraps_both_error_kinds() {
        let err = seek(&Value::Undefined, "x", None, SearchOptions::exact()).unwrap_err();
        assert_eq!(
            err,
            SeekerError::Construction(ConstructionError::UndefinedData)
        );

        let err = seek(&Value::Null, "x", None, SearchOptions::exact()).unwrap_err();
        assert_eq!(err, SeekerError::Search(SearchError::NullData));
    }

    #[test]
    fn error_messages_name_the_type() {
        assert!(SearchError::NullData.to_string().contains("null"));
        assert!(SearchError::UnsupportedType(DataType::Object)
            .to_string()
            .contains("object"));
        assert!(ConstructionError::UndefinedData
            .to_string()
            .contains("undefined"));
    }
}
