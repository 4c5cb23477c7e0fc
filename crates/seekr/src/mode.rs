//! Search modes.
//!
//! A [`Mode`] selects the comparison strategy used to match a value against
//! the query. The strategy table lives in [`Mode::comparator`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compare;
use crate::options::SearchOptions;
use crate::value::Value;

/// Signature shared by every comparison strategy.
pub type Comparator = fn(&Value, &Value, SearchOptions) -> bool;

/// How a value is matched against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Full equality, case-folded for strings unless case sensitivity is on.
    Exact,
}

impl Mode {
    /// Looks up a mode by name.
    ///
    /// The empty name falls back to [`Mode::Exact`]. Unrecognized names
    /// yield `None`, which makes every comparison a non-match.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "" | "exact" => Some(Mode::Exact),
            _ => None,
        }
    }

    /// Returns the comparison strategy for this mode.
    pub fn comparator(self) -> Comparator {
        match self {
            Mode::Exact => compare::exact,
        }
    }

    /// Returns the name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Exact => "exact",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes an optional mode name, mapping unrecognized names to `None`.
pub(crate) fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name.as_deref().and_then(Mode::from_name))
}
