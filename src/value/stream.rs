//! Forward-only lazy sources.

use std::cell::RefCell;
use std::rc::Rc;

use super::Value;

/// A single-pass, possibly infinite source of values.
///
/// A `Stream` has no length and no random access: the only way to reach an
/// element is to pull every element before it. Clones share one cursor, so
/// items pulled through one clone are gone for all of them.
///
/// # Examples
///
/// ```rust
/// use fx::value::{Stream, Value};
///
/// let mut numbers = Stream::count_from(1);
/// assert_eq!(numbers.next(), Some(Value::Int(1)));
///
/// let mut shared = numbers.clone();
/// assert_eq!(shared.next(), Some(Value::Int(2)));
/// assert_eq!(numbers.next(), Some(Value::Int(3)));
/// ```
#[derive(Clone)]
pub struct Stream {
    source: Rc<RefCell<Box<dyn Iterator<Item = Value>>>>,
}

impl Stream {
    /// Creates a stream pulling from `iterable`.
    #[must_use]
    pub fn new<I, T>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
        T: Into<Value> + 'static,
    {
        Self {
            source: Rc::new(RefCell::new(Box::new(
                iterable.into_iter().map(Into::into),
            ))),
        }
    }

    /// A stream counting up from `start`, ending after `i64::MAX`.
    ///
    /// ```rust
    /// use fx::value::{Stream, Value};
    ///
    /// let firsts: Vec<Value> = Stream::count_from(5).take(3).collect();
    /// assert_eq!(firsts, vec![Value::Int(5), Value::Int(6), Value::Int(7)]);
    /// ```
    #[must_use]
    pub fn count_from(start: i64) -> Self {
        Self::new(std::iter::successors(Some(start), |number| number.checked_add(1)))
    }

    /// Returns `true` if both streams share the same cursor.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}

impl Iterator for Stream {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.source.borrow_mut().next()
    }
}

impl std::fmt::Debug for Stream {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Stream").finish_non_exhaustive()
    }
}
