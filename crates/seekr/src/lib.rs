//! Seekr - Lightweight query engine for dynamic in-memory values.
//!
//! Seekr finds the elements of an array that match a query, either by
//! comparing each element directly or by comparing one of its properties.
//! It supports:
//!
//! - A dynamic [`Value`] model covering primitives, records, arrays, maps,
//!   sets and opaque handles, with conversion from `serde_json::Value`
//! - Exact matching, case-folded for strings unless asked otherwise
//! - Dot-path traversal of nested properties (`user.profile.name`)
//! - Typed errors for data that cannot be searched
//!
//! # Quick Start
//!
//! ```rust
//! use seekr::{SearchOptions, Seeker, Value};
//! use serde_json::json;
//!
//! let data = Value::from(json!([
//!     {"user": {"name": "Ann"}, "role": "admin"},
//!     {"user": {"name": "Bob"}, "role": "user"},
//!     {"user": null, "role": "Admin"},
//! ]));
//!
//! let seeker = Seeker::new(&data)?;
//!
//! let admins = seeker.search("ADMIN", Some("role"), SearchOptions::exact())?;
//! assert_eq!(admins.len(), 2);
//!
//! let ann = seeker.search("Ann", Some("user.name"), SearchOptions::exact().deep(true))?;
//! assert_eq!(ann.len(), 1);
//! # Ok::<(), seekr::SeekerError>(())
//! ```
//!
//! # Search Semantics
//!
//! ```text
//! search(query, property, options)
//!   query is "", null or undefined  -> []
//!   data is an array                -> elements where compare(element or property, query)
//!   data is null                    -> SearchError::NullData
//!   anything else                   -> SearchError::UnsupportedType
//! ```
//!
//! | Comparison | Rule |
//! |------------|------|
//! | value is `null`/`undefined` | never matches |
//! | string vs string | equal after lowercasing, or exactly equal with `case_sensitive` |
//! | anything else | strict equality: by value for primitives, by identity otherwise |
//! | no `mode` set | never matches |

mod compare;
mod data_type;
mod error;
mod mode;
mod options;
mod path;
mod seeker;
mod value;

// Re-export public API
pub use compare::{compare_property, compare_value};
pub use data_type::{classify, validate, DataType};
pub use error::{ConstructionError, Result, SearchError, SeekerError};
pub use mode::{Comparator, Mode};
pub use options::SearchOptions;
pub use path::resolve_path;
pub use seeker::{seek, Seeker};
pub use value::{Foreign, Function, Symbol, Value};
