//! # fx
//!
//! Composable function wrappers and deferred item accessors over a small
//! dynamic value model.
//!
//! ## Overview
//!
//! - **Values**: [`Value`] is the dynamically typed datum every wrapped
//!   operation consumes and produces: nil, booleans, numbers, strings, lists,
//!   mappings, lazy streams and functions.
//! - **Function wrapper**: [`Function`](function::Function) adds composition,
//!   piping, partial application and argument reversal to any operation, with
//!   operator sugar (`*`, `|`, `<<`, `&`, `!`).
//! - **Item getter**: [`ItemGetter`](itemgetter::ItemGetter) records a chain of
//!   subscripts and replays it against a value later. The root accessor is
//!   available as [`X`](itemgetter::X) and [`ITEM`](itemgetter::ITEM).
//!
//! ## Feature Flags
//!
//! - `function`: the function wrapper (default)
//! - `itemgetter`: the deferred item accessor (default)
//! - `tracing`: trace-level events on invocation and resolution (default)
//! - `serde`: serialization of values and accessor chains
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "function", feature = "itemgetter"))]
//! # {
//! use fx::prelude::*;
//!
//! let second = Function::from(X.at(1));
//! let double = Function::lift1(|value: i64| value * 2);
//!
//! let doubled_second = double * second;
//! assert_eq!(doubled_second.invoke((vec![1, 2, 3],))?, Value::from(4));
//! # }
//! # Ok::<(), fx::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use fx::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::value::{Capability, FromValue, Key, Stream, Value};

    #[cfg(feature = "function")]
    pub use crate::function::{Arguments, Function};

    #[cfg(feature = "itemgetter")]
    pub use crate::itemgetter::{ITEM, ItemGetter, Slice, Subscript, X};
}

pub mod error;
pub mod value;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "itemgetter")]
pub mod itemgetter;

pub use error::Error;
pub use value::Value;
