//! The `compose!` and `pipe!` macros.

/// Composes any number of operands into one [`Function`](crate::function::Function),
/// right to left.
///
/// `compose!(f, g, h)` invokes `h` with the arguments, then `g`, then `f`.
/// Operands may be `Function`s, operation closures or [`Value`](crate::Value)s.
///
/// # Syntax
///
/// - `compose!(f)` - `f` as a `Function`
/// - `compose!(f, g, ...)` - `f ∘ g ∘ ...`
///
/// # Examples
///
/// ```rust
/// use fx::compose;
/// use fx::function::Function;
/// use fx::Value;
///
/// let negate = Function::lift1(|value: i64| -value);
/// let absolute = Function::lift1(|value: i64| value.abs());
/// let double = Function::lift1(|value: i64| value * 2);
///
/// let composed = compose!(negate, absolute, double);
/// assert_eq!(composed.invoke((-4,))?, Value::from(-8));
/// # Ok::<(), fx::Error>(())
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $crate::function::Function::from($function)
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::function::Function::from($outer)$(.compose($inner))+
    };
}

/// Feeds a value through any number of operands, left to right, and returns
/// the result.
///
/// `pipe!(x, f, g)` is `g(f(x))`, returned as `Result<Value, Error>`.
///
/// # Examples
///
/// ```rust
/// use fx::pipe;
/// use fx::function::Function;
/// use fx::Value;
///
/// let add = Function::lift2(|left: i64, right: i64| left + right);
/// let double = Function::lift1(|value: i64| value * 2);
///
/// assert_eq!(pipe!(5, double.clone(), add << 1)?, Value::from(11));
/// assert_eq!(pipe!(5)?, Value::from(5));
/// # Ok::<(), fx::Error>(())
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $function:expr)* $(,)?) => {
        $crate::function::Function::constant($value)$(.pipe($function))*.value()
    };
}
