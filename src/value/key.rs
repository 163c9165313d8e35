//! Hashable keys.
//!
//! [`Key`] is the subset of [`Value`](super::Value) that can index a mapping.
//! Integer keys double as sequence indices. Boolean keys behave as the
//! integers `0` and `1`: they index sequences and find integer map entries.

use super::Value;
use crate::error::Error;

/// A hashable key for mapping lookups and sequence indexing.
///
/// # Examples
///
/// ```rust
/// use fx::value::Key;
///
/// assert_eq!(Key::from(3).as_index(), Some(3));
/// assert_eq!(Key::from(true).as_index(), Some(1));
/// assert_eq!(Key::from("name").as_index(), None);
/// assert_eq!(Key::from(false), Key::from(0));
/// assert_eq!(format!("{}", Key::from("name")), "\"name\"");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Key {
    /// The nil key.
    Nil,
    /// A boolean key.
    Bool(bool),
    /// An integer key or index.
    Int(i64),
    /// A string key.
    Str(String),
}

impl Key {
    /// Returns the integer if this key can be used as a sequence index.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Bool(flag) => Some(*flag as i64),
            Self::Int(index) => Some(*index),
            _ => None,
        }
    }

    fn canonical(&self) -> Canonical<'_> {
        match self {
            Self::Nil => Canonical::Nil,
            Self::Bool(flag) => Canonical::Int(i64::from(*flag)),
            Self::Int(index) => Canonical::Int(*index),
            Self::Str(text) => Canonical::Str(text),
        }
    }

    /// The kind of key, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "str",
        }
    }
}

/// Comparison view of a key, with booleans folded into integers.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Canonical<'a> {
    Nil,
    Int(i64),
    Str(&'a str),
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Key {}

impl std::hash::Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(index) => write!(formatter, "{index}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
        }
    }
}

impl From<()> for Key {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Key {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Int(index)
    }
}

impl From<isize> for Key {
    fn from(index: isize) -> Self {
        Self::Int(index as i64)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Int(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Nil => Self::Nil,
            Key::Bool(flag) => Self::Bool(flag),
            Key::Int(index) => Self::Int(index),
            Key::Str(text) => Self::from(text),
        }
    }
}

impl TryFrom<&Value> for Key {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Nil => Ok(Self::Nil),
            Value::Bool(flag) => Ok(Self::Bool(*flag)),
            Value::Int(index) => Ok(Self::Int(*index)),
            Value::Str(text) => Ok(Self::Str(text.to_string())),
            other => Err(Error::TypeMismatch {
                expected: "hashable key",
                found: other.type_name(),
            }),
        }
    }
}
