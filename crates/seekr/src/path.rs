//! Dot-path resolution for nested properties.

use std::borrow::Cow;

use crate::value::Value;

/// Resolves a dot-separated path such as `user.profile.name` against `root`.
///
/// Each segment is read from the current value with [`Value::get`]. The walk
/// stops with `None` as soon as the current value is falsy or the next
/// segment is missing, so `null` intermediates, paths deeper than the data,
/// and paths into primitives all resolve to not-found.
///
/// ```
/// use seekr::{resolve_path, Value};
///
/// let item = Value::object([("user", Value::object([("name", "Ann")]))]);
///
/// assert_eq!(resolve_path(&item, "user.name").as_deref(), Some(&Value::from("Ann")));
/// assert!(resolve_path(&item, "user.name.first").is_none());
/// ```
pub fn resolve_path<'v>(root: &'v Value, path: &str) -> Option<Cow<'v, Value>> {
    let mut current = Cow::Borrowed(root);
    for segment in path.split('.') {
        if !current.is_truthy() {
            return None;
        }
        current = match current {
            Cow::Borrowed(value) => value.get(segment)?,
            Cow::Owned(value) => Cow::Owned(value.get(segment)?.into_owned()),
        };
    }
    Some(current)
}
