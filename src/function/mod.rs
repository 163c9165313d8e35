//! The function wrapper.
//!
//! [`Function`] wraps any operation over [`Value`](crate::Value)s, or a
//! constant, and offers four combinators, each returning a new wrapper:
//!
//! - [`compose`](Function::compose): `f.compose(g)(x) == f(g(x))`
//! - [`pipe`](Function::pipe): `f.pipe(g)(x) == g(f(x))`
//! - [`apply`](Function::apply): binds leading positional and default keyword
//!   arguments
//! - [`reverse_apply`](Function::reverse_apply): reverses positional arguments
//!
//! The same combinators are available as operators: `*` composes, `|` pipes,
//! `<<` and `&` apply one argument, `!` reverses.
//!
//! # Examples
//!
//! ```rust
//! use fx::args;
//! use fx::function::{Arguments, Function};
//! use fx::Value;
//!
//! let parse = Function::new(|arguments: Arguments| {
//!     let text: String = arguments.take(0)?;
//!     let base = match arguments.keyword("base") {
//!         Some(base) => base.clone().extract::<u32>()?,
//!         None => 10,
//!     };
//!     i64::from_str_radix(&text, base)
//!         .map(Value::from)
//!         .map_err(fx::Error::raised)
//! });
//!
//! let from_hex = parse.apply(args![; base = 16]);
//! assert_eq!(from_hex.invoke(("ff",))?, Value::from(255));
//! assert_eq!(parse.invoke(("10",))?, Value::from(10));
//! # Ok::<(), fx::Error>(())
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f.compose(g.compose(h)) == f.compose(g).compose(h)`
//! - **Identity**: `f.pipe(identity) == f == identity.compose(f)`
//! - **Pipe/compose duality**: `f.pipe(g) == g.compose(f)`
//! - **Double reversal**: `f.reverse_apply().reverse_apply() == f`
//! - **Accumulation**: `f.apply((a,)).apply((b,)) == f.apply((a, b))`

mod arguments;
mod lift;
mod macros;
mod operators;
mod utils;
mod wrapper;

pub use arguments::{Arguments, Keywords, Positional};
pub use utils::{compose, flip, identity};
pub use wrapper::Function;

pub use crate::args;
pub use crate::compose;
pub use crate::pipe;
