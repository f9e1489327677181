//! Decoding of keyed archives embedded in document columns.
//!
//! A keyed archive is a property list (binary or XML) whose root dictionary
//! holds an `$objects` array. Entries of that array are either boxed
//! primitives or dictionaries whose `$class` entry is a [`Value::Uid`]
//! pointing at another entry describing the class.
use std::collections::BTreeMap;
use std::time::SystemTime;

use thiserror::Error;

mod reader;
#[cfg(test)]
pub(crate) mod fixtures;


pub use reader::from_bytes;

/// Key of the object table in a keyed archive root.
pub const OBJECTS_KEY: &str = "$objects";
/// Key holding the class reference of an archived object.
pub const CLASS_KEY: &str = "$class";

#[derive(Debug, PartialEq, Error)]
pub enum ArchiveError {
    #[error("malformed property list: {0}")]
    Malformed(String),
    #[error("property list holds more than {0} values for its size")]
    TooManyObjects(usize),
    #[error("unsupported property list value")]
    UnsupportedObject,
    #[error("integer does not fit in 64 bits")]
    IntegerOverflow,
    #[error("dictionary key is not a string")]
    InvalidKey,
    #[error("dictionary key without a value")]
    MissingValue,
    #[error("unbalanced collection")]
    UnbalancedCollection,
    #[error("more than one root value")]
    TrailingValue,
    #[error("empty property list")]
    Empty,
    #[error("archive root is not a dictionary")]
    NotADictionary,
    #[error("archive has no `$objects` entry")]
    MissingObjects,
    #[error("archive `$objects` entry is not an array")]
    ObjectsNotAnArray,
}

/// A decoded archive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Unsigned(u64),
    Signed(i64),
    Real(f64),
    Date(SystemTime),
    Data(Vec<u8>),
    String(String),
    Array(Vec<Value>),
    Dictionary(BTreeMap<String, Value>),
    /// Reference into the `$objects` table.
    Uid(u64),
}

impl Value {
    /// Returns the `$objects` table of a keyed archive.
    pub fn objects(&self) -> Result<&[Value], ArchiveError> {
        let Value::Dictionary(root) = self else {
            return Err(ArchiveError::NotADictionary);
        };

        match root.get(OBJECTS_KEY) {
            Some(Value::Array(objects)) => Ok(objects),
            Some(_) => Err(ArchiveError::ObjectsNotAnArray),
            None => Err(ArchiveError::MissingObjects),
        }
    }

    /// Reads a boxed integer of either signedness.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Unsigned(value) => i64::try_from(*value).ok(),
            Value::Signed(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Dictionary(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Decodes an optional blob. An absent blob is not an error.
pub fn decode(blob: Option<&[u8]>) -> Result<Option<Value>, ArchiveError> {
    blob.map(from_bytes).transpose()
}
