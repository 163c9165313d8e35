//! Operator sugar over the named combinators.
//!
//! | Operator   | Meaning                          |
//! |------------|----------------------------------|
//! | `f * g`    | `f.compose(g)`                   |
//! | `f \| g`   | `f.pipe(g)`                      |
//! | `v \| f`   | `Function::wrap(v).pipe(f)`      |
//! | `f << x`   | `f.apply((x,))`                  |
//! | `f & x`    | `f.apply((x,))`                  |
//! | `f <<= x`  | `f = f.apply((x,))`              |
//! | `!f`       | `f.reverse_apply()`              |
//!
//! Rust's precedence (`*` over `<<` over `&` over `|`) lets chains read left
//! to right without parentheses: `map << double & items | to_list` binds as
//! `((map << double) & items) | to_list`. Use `&` where an argument is
//! itself a partial application, since `<<` binds tighter.
//!
//! # Examples
//!
//! ```rust
//! use fx::function::Function;
//! use fx::Value;
//!
//! let add = Function::lift2(|left: i64, right: i64| left + right);
//! let mul = Function::lift2(|left: i64, right: i64| left * right);
//! let sub = Function::lift2(|left: i64, right: i64| left - right);
//! let neg = Function::lift1(|value: i64| -value);
//!
//! // neg(sub(mul(5, add(2, 1)), 40))
//! let result = Value::from(1) | add << 2 | mul << 5 | !sub << 40 | neg;
//! assert!(result.equals(25)?);
//! # Ok::<(), fx::Error>(())
//! ```

use std::ops::{BitAnd, BitOr, Mul, Not, Shl, ShlAssign};

use crate::function::{Arguments, Function};
use crate::value::Value;

impl<T: Into<Self>> Mul<T> for Function {
    type Output = Self;

    fn mul(self, other: T) -> Self {
        self.compose(other)
    }
}

impl<T: Into<Self>> BitOr<T> for Function {
    type Output = Self;

    fn bitor(self, other: T) -> Self {
        self.pipe(other)
    }
}

impl BitOr<Function> for Value {
    type Output = Function;

    fn bitor(self, function: Function) -> Function {
        Function::wrap(self).pipe(function)
    }
}

impl<T: Into<Value>> Shl<T> for Function {
    type Output = Self;

    fn shl(self, argument: T) -> Self {
        self.apply(Arguments::one(argument))
    }
}

impl<T: Into<Value>> BitAnd<T> for Function {
    type Output = Self;

    fn bitand(self, argument: T) -> Self {
        self.apply(Arguments::one(argument))
    }
}

impl<T: Into<Value>> ShlAssign<T> for Function {
    fn shl_assign(&mut self, argument: T) {
        *self = self.apply(Arguments::one(argument));
    }
}

impl Not for Function {
    type Output = Self;

    fn not(self) -> Self {
        self.reverse_apply()
    }
}

impl Not for &Function {
    type Output = Function;

    fn not(self) -> Function {
        self.reverse_apply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn add() -> Function {
        Function::lift2(|left: i64, right: i64| left + right)
    }

    #[test]
    fn test_shl_applies_in_order() {
        let minus = Function::lift2(|left: i64, right: i64| left - right);
        assert_eq!((minus.clone() << 3 << 2).value(), Ok(Value::from(1)));
        assert_eq!((!minus << 2).invoke((1,)), Ok(Value::from(-1)));
    }

    #[test]
    fn test_shl_assign() {
        let mut partial = add();
        partial <<= 1;
        partial <<= 4;
        assert_eq!(partial.value(), Ok(Value::from(5)));
    }

    #[test]
    fn test_mul_composes_right_to_left() {
        let add_2 = add() << 2;
        let mul_5 = Function::lift2(|left: i64, right: i64| left * right) << 5;
        assert_eq!((add_2.clone() * mul_5.clone()).invoke((1,)), Ok(Value::from(7)));
        assert_eq!((mul_5 * add_2).invoke((1,)), Ok(Value::from(15)));
    }

    #[test]
    fn test_value_pipes_into_function() {
        let piped = Value::from(41) | add() << 1;
        assert_eq!(piped.value(), Ok(Value::from(42)));
    }

    #[test]
    fn test_mul_with_constant_value() {
        let composed = Function::identity() * Value::from(42);
        assert_eq!(composed.value(), Ok(Value::from(42)));
        assert!(matches!(
            composed.invoke((1,)),
            Err(Error::Arity { expected: 0, .. })
        ));
    }
}
