//! Type classification and construction-time validation.
//!
//! Every [`Value`] maps to exactly one [`DataType`]. The tag is computed once
//! when an engine is built and selects the search strategy from then on.

use std::fmt;

use serde::Serialize;

use crate::error::ConstructionError;
use crate::value::Value;

/// Coarse semantic classification of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Undefined,
    Null,
    String,
    Boolean,
    Number,
    Array,
    Map,
    Set,
    Object,
    Symbol,
    Function,
    BigInt,
    /// Runtime type outside every recognized category.
    Unknown,
}

impl DataType {
    /// Returns the lowercase name of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Undefined => "undefined",
            DataType::Null => "null",
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Number => "number",
            DataType::Array => "array",
            DataType::Map => "map",
            DataType::Set => "set",
            DataType::Object => "object",
            DataType::Symbol => "symbol",
            DataType::Function => "function",
            DataType::BigInt => "bigint",
            DataType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a value.
///
/// Total over all values. The arms follow the order of the tag list:
/// `undefined` and `null` first, then primitives, then containers
/// (array, map and set before the generic object), then opaque handles.
/// Anything else lands on [`DataType::Unknown`].
pub fn classify(value: &Value) -> DataType {
    match value {
        Value::Undefined => DataType::Undefined,
        Value::Null => DataType::Null,
        Value::String(_) => DataType::String,
        Value::Bool(_) => DataType::Boolean,
        Value::Number(_) => DataType::Number,
        Value::Array(_) => DataType::Array,
        Value::Map(_) => DataType::Map,
        Value::Set(_) => DataType::Set,
        Value::Object(_) => DataType::Object,
        Value::Symbol(_) => DataType::Symbol,
        Value::Function(_) => DataType::Function,
        Value::BigInt(_) => DataType::BigInt,
        Value::Foreign(_) => DataType::Unknown,
    }
}

/// Rejects data that can never be searched.
///
/// `undefined` and `unknown` fail here. Every other tag passes, including
/// `null`, which is only rejected once a search is attempted. `data` is the
/// value `data_type` was computed from; it names the host type in errors.
pub fn validate(data_type: DataType, data: &Value) -> Result<(), ConstructionError> {
    match data_type {
        DataType::Undefined => Err(ConstructionError::UndefinedData),
        DataType::Unknown => {
            let type_name = match data {
                Value::Foreign(foreign) => foreign.type_name().to_string(),
                _ => data_type.to_string(),
            };
            Err(ConstructionError::UnknownType(type_name))
        }
        DataType::Null
        | DataType::String
        | DataType::Boolean
        | DataType::Number
        | DataType::Array
        | DataType::Map
        | DataType::Set
        | DataType::Object
        | DataType::Symbol
        | DataType::Function
        | DataType::BigInt => Ok(()),
    }
}
