//! The crate error type.
//!
//! Two kinds of error originate in the item getter itself (an unsupported key
//! and an index past the end of a forward-only source). Native lookups on
//! mappings and scalars add two more. The argument errors are raised by lifted
//! functions and typed extraction; the wrapper never produces or translates an
//! error on its own, it only hands back whatever the held operation returned.

use crate::value::Key;

/// Errors produced while invoking wrapped operations or replaying an item getter.
///
/// # Examples
///
/// ```rust
/// use fx::Error;
///
/// let error = Error::IndexOutOfRange { index: 10 };
/// assert_eq!(format!("{error}"), "index out of range: 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is not usable against the target, e.g. a negative index on a
    /// forward-only stream or a string key on a list.
    InvalidKey {
        /// The offending subscript, rendered in subscript notation.
        key: String,
        /// The kind of value the key was applied to.
        target: &'static str,
    },
    /// A forward-only source ran out before reaching the requested index, or a
    /// sequence index fell outside its bounds.
    IndexOutOfRange {
        /// The requested index.
        index: i64,
    },
    /// A mapping had no entry for the key.
    MissingKey {
        /// The key that was looked up.
        key: Key,
    },
    /// The value supports neither keyed access nor iteration.
    NotSubscriptable {
        /// The kind of value that was subscripted.
        type_name: &'static str,
    },
    /// Wrong number of positional arguments.
    Arity {
        /// The number of positional arguments the operation takes.
        expected: usize,
        /// The number it was called with.
        found: usize,
    },
    /// A value had a different kind than the operation expected.
    TypeMismatch {
        /// The kind the operation expected.
        expected: &'static str,
        /// The kind it received.
        found: &'static str,
    },
    /// A keyword argument the operation does not accept.
    UnexpectedKeyword {
        /// The keyword name.
        name: String,
    },
    /// An error raised by a user-supplied operation.
    Raised(String),
}

impl Error {
    /// Creates an [`Error::Raised`] from anything displayable.
    ///
    /// ```rust
    /// use fx::Error;
    ///
    /// let error = Error::raised("division by zero");
    /// assert_eq!(error, Error::Raised("division by zero".to_string()));
    /// ```
    #[must_use]
    pub fn raised(message: impl std::fmt::Display) -> Self {
        Self::Raised(message.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey { key, target } => {
                write!(formatter, "invalid key {key} for {target}")
            }
            Self::IndexOutOfRange { index } => write!(formatter, "index out of range: {index}"),
            Self::MissingKey { key } => write!(formatter, "missing key: {key}"),
            Self::NotSubscriptable { type_name } => {
                write!(formatter, "{type_name} is not subscriptable")
            }
            Self::Arity { expected, found } => write!(
                formatter,
                "expected {expected} positional argument(s), found {found}"
            ),
            Self::TypeMismatch { expected, found } => {
                write!(formatter, "expected {expected}, found {found}")
            }
            Self::UnexpectedKeyword { name } => {
                write!(formatter, "unexpected keyword argument: {name}")
            }
            Self::Raised(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for Error {}
