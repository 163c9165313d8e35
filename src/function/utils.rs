//! Typed helpers over plain Rust closures.
//!
//! These are the statically typed counterparts of
//! [`Function::compose`](crate::function::Function::compose) and
//! [`Function::reverse_apply`](crate::function::Function::reverse_apply), for
//! code that does not need the dynamic value model.

/// Returns its argument unchanged.
///
/// The unit of [`compose`]: `compose(identity, f)` and `compose(f, identity)`
/// both behave as `f`.
///
/// ```rust
/// use fx::function::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// `compose(f, g)(x) == f(g(x))`.
///
/// ```rust
/// use fx::function::compose;
///
/// let add_2 = |value: i32| value + 2;
/// let mul_5 = |value: i32| value * 5;
///
/// assert_eq!(compose(add_2, mul_5)(1), 7);
/// assert_eq!(compose(mul_5, add_2)(1), 15);
/// ```
#[inline]
#[must_use]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Takes a binary function's arguments in reverse order.
///
/// ```rust
/// use fx::function::flip;
///
/// let minus = |left: i32, right: i32| left - right;
/// assert_eq!(minus(5, 3), 2);
/// assert_eq!(flip(minus)(5, 3), -2);
/// ```
#[inline]
#[must_use]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_twice_restores_order() {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        let restored = flip(flip(power));
        assert_eq!(restored(2, 3), 8);
    }

    #[test]
    fn test_compose_changes_type() {
        let length = compose(|text: String| text.len(), |number: i32| number.to_string());
        assert_eq!(length(12345), 5);
    }
}
