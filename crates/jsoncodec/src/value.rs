//! The JSON value tree.
//!
//! [`Value`] is a tagged union over the six JSON kinds. `Null`, `true` and
//! `false` are payload-free variants: constructing or dropping them never
//! touches the heap, so they behave like the shared singletons of the
//! original design while equality stays structural. Every non-trivial
//! payload is owned exclusively by its variant; dropping a value drops its
//! whole subtree, and moving a value into a container transfers ownership.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::array::Array;
use crate::emit::emit_to_string;
use crate::error::Error;
use crate::map::ObjectMap;
use crate::parser::parse_str;

/// The tag of a [`Value`], used in [`Error::WrongType`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Bool,
    /// An IEEE-754 double.
    Number,
    /// A UTF-8 string.
    String,
    /// An ordered key/value map.
    Object,
    /// A fixed-length sequence.
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        })
    }
}

/// A JSON value as defined by [RFC 8259].
///
/// The tag is fixed at construction; payloads are mutated only through the
/// owning container's API ([`ObjectMap::put`], [`Array::set`], the `_mut`
/// accessors), never re-tagged in place.
///
/// # Examples
///
/// ```
/// use jsoncodec::{ObjectMap, Value};
///
/// let mut map = ObjectMap::new();
/// map.put("key", Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// An IEEE-754 double; integer and fractional literals are not
    /// distinguished.
    Number(f64),
    /// A UTF-8 string, compared byte-lexicographically.
    String(String),
    /// An ordered map with unique keys.
    Object(ObjectMap),
    /// A fixed-length sequence.
    Array(Array),
}

impl Value {
    /// The kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Object(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
        }
    }

    /// Returns `true` if the value is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn wrong_type(&self, expected: ValueKind) -> Error {
        Error::WrongType {
            expected,
            actual: self.kind(),
        }
    }

    /// The boolean payload.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the value is not a `Bool`.
    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(other.wrong_type(ValueKind::Bool)),
        }
    }

    /// The numeric payload.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the value is not a `Number`.
    pub fn as_number(&self) -> Result<f64, Error> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(other.wrong_type(ValueKind::Number)),
        }
    }

    /// The string payload, borrowed.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the value is not a `String`.
    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.wrong_type(ValueKind::String)),
        }
    }

    /// The object payload, borrowed. Ownership stays with this value.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the value is not an `Object`.
    pub fn as_object(&self) -> Result<&ObjectMap, Error> {
        match self {
            Self::Object(map) => Ok(map),
            other => Err(other.wrong_type(ValueKind::Object)),
        }
    }

    /// The object payload, mutably borrowed.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the value is not an `Object`.
    pub fn as_object_mut(&mut self) -> Result<&mut ObjectMap, Error> {
        match self {
            Self::Object(map) => Ok(map),
            other => Err(other.wrong_type(ValueKind::Object)),
        }
    }

    /// The array payload, borrowed.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the value is not an `Array`.
    pub fn as_array(&self) -> Result<&Array, Error> {
        match self {
            Self::Array(array) => Ok(array),
            other => Err(other.wrong_type(ValueKind::Array)),
        }
    }

    /// The array payload, mutably borrowed.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the value is not an `Array`.
    pub fn as_array_mut(&mut self) -> Result<&mut Array, Error> {
        match self {
            Self::Array(array) => Ok(array),
            other => Err(other.wrong_type(ValueKind::Array)),
        }
    }

    /// Recursively duplicates the owned subtree into a fresh set of
    /// containers. Payload-free variants are duplicated for free.
    ///
    /// Equivalent to [`Clone::clone`]; provided as an explicitly named
    /// operation because deep duplication of a large tree is not a cheap
    /// copy.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<ObjectMap> for Value {
    fn from(v: ObjectMap) -> Self {
        Self::Object(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl fmt::Display for Value {
    /// Renders the canonical emission of this value.
    ///
    /// Non-finite numbers have no JSON form and yield [`fmt::Error`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = emit_to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
