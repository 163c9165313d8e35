//! The deferred item accessor.
//!
//! [`X`] (also exported as [`ITEM`]) is the root [`ItemGetter`]: subscripting
//! it records accesses instead of performing them, and [`ItemGetter::apply`]
//! replays them against a value later.
//!
//! Each subscript is resolved on the current value's
//! [`Capability`](crate::value::Capability):
//!
//! - mappings, lists and strings use their native access, including negative
//!   indices and clamped slices;
//! - a slice of a stream is another stream, restricted lazily;
//! - an index into a stream pulls forward until it is reached;
//! - scalars cannot be subscripted.
//!
//! # Examples
//!
//! ```rust
//! use fx::itemgetter;
//! use fx::itemgetter::{ITEM, X};
//! use fx::value::Stream;
//! use fx::Value;
//!
//! let answer = X.at(41).apply(Stream::count_from(1))?;
//! assert_eq!(answer, Value::from(42));
//!
//! let window = X.at(1..5).apply(Stream::count_from(1))?;
//! let window: Vec<Value> = window.iterate()?.into_iter().flatten().collect();
//! assert_eq!(Value::list(window), Value::list(2..=5));
//!
//! let tail_of_first = itemgetter![0, 2..];
//! assert_eq!(tail_of_first.apply(vec!["ABCDE"])?, Value::from("CDE"));
//! assert!(std::ptr::eq(&X, &ITEM));
//! # Ok::<(), fx::Error>(())
//! ```

mod getter;
mod subscript;

pub use getter::ItemGetter;
pub use subscript::{Slice, Subscript};

/// The root item getter.
pub static X: ItemGetter = ItemGetter::new();

pub use self::X as ITEM;

/// Builds an [`ItemGetter`] from a list of subscripts.
///
/// `itemgetter![a, b, c]` is `X.at(a).at(b).at(c)`.
///
/// ```rust
/// use fx::itemgetter;
/// use fx::Value;
///
/// let getter = itemgetter![1, "name"];
/// assert_eq!(getter.to_string(), "_[1][\"name\"]");
///
/// let people = Value::from(vec![
///     Value::map([("name", "Ann")]),
///     Value::map([("name", "Joe")]),
/// ]);
/// assert_eq!(getter.apply(people)?, Value::from("Joe"));
/// # Ok::<(), fx::Error>(())
/// ```
#[macro_export]
macro_rules! itemgetter {
    ($($subscript:expr),* $(,)?) => {
        $crate::itemgetter::ItemGetter::new()$(.at($subscript))*
    };
}
