//! Runtime value model for searchable data.
//!
//! The [`Value`] enum models an arbitrary dynamic host value: primitives,
//! compound containers, and opaque handles such as symbols and functions.
//! Compound values are shared through [`Arc`], so a clone keeps the identity
//! of the original. That identity is what [`Value::strict_equals`] compares
//! for anything that is not a primitive.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A dynamic value that can be searched or used as a query.
///
/// # Example
///
/// ```
/// use seekr::Value;
///
/// let user = Value::object([("name", Value::from("Ann")), ("age", Value::from(31))]);
///
/// assert_eq!(user.get("name").as_deref(), Some(&Value::from("Ann")));
/// assert!(user.get("email").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// Arbitrary-size integer, kept apart from [`Value::Number`].
    BigInt(i128),
    /// String value.
    String(String),
    /// Unique symbol.
    Symbol(Symbol),
    /// Callable handle.
    Function(Function),
    /// Ordered list of values.
    Array(Arc<Vec<Value>>),
    /// String-keyed record.
    Object(Arc<BTreeMap<String, Value>>),
    /// Keyed collection with arbitrary keys, in insertion order.
    Map(Arc<Vec<(Value, Value)>>),
    /// Collection of distinct values, in insertion order.
    Set(Arc<Vec<Value>>),
    /// Host value of a runtime type outside the recognized categories.
    Foreign(Foreign),
}

impl Value {
    /// Builds an array value.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Builds an object value from key/value pairs.
    pub fn object<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(Arc::new(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Builds a map value from key/value pairs.
    pub fn map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        Value::Map(Arc::new(entries.into_iter().collect()))
    }

    /// Builds a set value. Later duplicates (by strict equality) are dropped.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut distinct: Vec<Value> = Vec::new();
        for item in items.into_iter().map(Into::into) {
            if !distinct.iter().any(|seen| seen.strict_equals(&item)) {
                distinct.push(item);
            }
        }
        Value::Set(Arc::new(distinct))
    }

    /// Returns `true` if this is `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is `Null` or `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the array elements, if present.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns whether the value counts as true in a boolean context.
    ///
    /// `Undefined`, `Null`, `false`, `0`, `NaN`, the empty string and a zero
    /// `BigInt` are falsy. Everything else, including empty containers, is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::BigInt(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_)
            | Value::Function(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Map(_)
            | Value::Set(_)
            | Value::Foreign(_) => true,
        }
    }

    /// Reads a named property.
    ///
    /// Objects resolve their own keys. Arrays resolve canonical indices
    /// (`"0"`, `"12"`, but not `"01"`) and `length`. Strings resolve the same
    /// keys over UTF-16 code units: an index yields a one-unit string (a lone
    /// surrogate half becomes U+FFFD). Maps and sets expose `size`. A
    /// property that is missing or holds `Undefined` yields `None`; access
    /// never fails.
    pub fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        let found = match self {
            Value::Object(fields) => fields.get(key).map(Cow::Borrowed),
            Value::Array(items) if key == "length" => Some(Cow::Owned(Value::from(items.len()))),
            Value::Array(items) => array_index(key)
                .and_then(|index| items.get(index))
                .map(Cow::Borrowed),
            Value::String(s) if key == "length" => {
                Some(Cow::Owned(Value::from(s.encode_utf16().count())))
            }
            Value::String(s) => array_index(key)
                .and_then(|index| s.encode_utf16().nth(index))
                .map(|unit| Cow::Owned(Value::from(String::from_utf16_lossy(&[unit])))),
            Value::Map(entries) if key == "size" => Some(Cow::Owned(Value::from(entries.len()))),
            Value::Set(items) if key == "size" => Some(Cow::Owned(Value::from(items.len()))),
            _ => None,
        };
        found.filter(|value| !value.is_undefined())
    }

    /// Identity-aware equality.
    ///
    /// Primitives compare by value: numbers use IEEE equality, so `NaN`
    /// never equals itself, and a `Number` never equals a `BigInt`.
    /// Everything else compares by identity: two values are equal only if
    /// one is a clone of the other.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Arc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Arc::ptr_eq(a, b),
            (Value::Foreign(a), Value::Foreign(b)) => a == b,
            _ => false,
        }
    }
}

fn array_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
}

/// A unique symbol. Two symbols are equal only if one is a clone of the other,
/// regardless of their descriptions.
#[derive(Debug, Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a fresh symbol.
    pub fn new(description: impl Into<String>) -> Self {
        Symbol(Arc::from(description.into()))
    }

    /// Returns the symbol's description.
    pub fn description(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// An opaque callable handle, compared by identity.
#[derive(Debug, Clone)]
pub struct Function(Arc<str>);

impl Function {
    /// Creates a fresh function handle.
    pub fn new(name: impl Into<String>) -> Self {
        Function(Arc::from(name.into()))
    }

    /// Returns the function's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A host value whose runtime type falls outside the recognized categories.
#[derive(Debug, Clone)]
pub struct Foreign(Arc<str>);

impl Foreign {
    /// Creates a fresh foreign handle with the given runtime type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Foreign(Arc::from(type_name.into()))
    }

    /// Returns the runtime type name.
    pub fn type_name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Foreign {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// Conversions from primitive types

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Foreign> for Value {
    fn from(f: Foreign) -> Self {
        Value::Foreign(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Object(Arc::new(fields))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items),
            serde_json::Value::Object(fields) => Value::object(fields),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined
            | Value::Null
            | Value::Symbol(_)
            | Value::Function(_)
            | Value::Foreign(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::BigInt(n) => serializer.serialize_i128(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Map(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    seq.serialize_element(&(key, value))?;
                }
                seq.end()
            }
        }
    }
}
