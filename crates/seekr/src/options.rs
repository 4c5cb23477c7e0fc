//! Search configuration.
//!
//! [`SearchOptions`] is an immutable `Copy` value built with chained setters
//! or deserialized from a camelCase record such as
//! `{"mode": "exact", "caseSensitive": true, "deep": false}`.

use serde::{Deserialize, Serialize};

use crate::mode::{self, Mode};

/// Options controlling how a search compares values.
///
/// | Field | Default | Effect |
/// |-------|---------|--------|
/// | `mode` | `None` | Comparison strategy. `None` never matches. |
/// | `case_sensitive` | `false` | Distinguish case when both sides are strings. |
/// | `deep` | `false` | Treat dots in a property name as a nested path. |
///
/// # Example
///
/// ```
/// use seekr::{Mode, SearchOptions};
///
/// let options = SearchOptions::new().mode(Mode::Exact).deep(true);
/// assert_eq!(options, SearchOptions::exact().deep(true));
/// assert!(!options.case_sensitive);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Comparison strategy; `None` when absent or unrecognized.
    #[serde(deserialize_with = "mode::deserialize_mode")]
    pub mode: Option<Mode>,
    /// Compare strings without case folding.
    pub case_sensitive: bool,
    /// Resolve dotted property names as nested paths.
    pub deep: bool,
}

impl SearchOptions {
    /// Creates options with every field at its default.
    pub fn new() -> Self {
        SearchOptions::default()
    }

    /// Creates options in exact mode.
    pub fn exact() -> Self {
        SearchOptions::new().mode(Mode::Exact)
    }

    /// Sets the comparison mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets case sensitivity for string comparisons.
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Enables or disables dot-path resolution.
    pub fn deep(mut self, yes: bool) -> Self {
        self.deep = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SearchOptions::new();
        assert_eq!(options.mode, None);
        assert!(!options.case_sensitive);
        assert!(!options.deep);
    }

    #[test]
    fn builder() {
        let options = SearchOptions::exact().case_sensitive(true).deep(true);
        assert_eq!(options.mode, Some(Mode::Exact));
        assert!(options.case_sensitive);
        assert!(options.deep);
    }

    #[test]
    fn deserializes_camel_case() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"mode": "exact", "caseSensitive": true}"#).unwrap();
        assert_eq!(options, SearchOptions::exact().case_sensitive(true));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SearchOptions::new());
    }

    #[test]
    fn empty_mode_name_means_exact() {
        let options: SearchOptions = serde_json::from_str(r#"{"mode": ""}"#).unwrap();
        assert_eq!(options.mode, Some(Mode::Exact));
    }

    #[test]
    fn unknown_mode_name_is_not_an_error() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"mode": "fuzzy", "deep": true}"#).unwrap();
        assert_eq!(options.mode, None);
        assert!(options.deep);
    }

    #[test]
    fn null_mode_is_absent() {
        let options: SearchOptions = serde_json::from_str(r#"{"mode": null}"#).unwrap();
        assert_eq!(options.mode, None);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(SearchOptions::exact().deep(true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"mode": "exact", "caseSensitive": false, "deep": true})
        );
    }
}
