//! Lifting typed Rust closures into [`Function`]s.
//!
//! `liftN` adapts an `Fn(A1, ..., AN) -> R` and `try_liftN` an
//! `Fn(A1, ..., AN) -> Result<R, Error>`. The lifted operation rejects keyword
//! arguments, checks the positional count, and converts each argument with
//! [`FromValue`] before calling the closure.
//!
//! # Examples
//!
//! ```rust
//! use fx::function::Function;
//! use fx::{Error, Value};
//!
//! let divide = Function::try_lift2(|numerator: i64, denominator: i64| {
//!     numerator
//!         .checked_div(denominator)
//!         .ok_or_else(|| Error::raised("division by zero"))
//! });
//! assert_eq!(divide.invoke((7, 2))?, Value::from(3));
//! assert_eq!(divide.invoke((7, 0)), Err(Error::raised("division by zero")));
//! assert!(matches!(divide.invoke((7,)), Err(Error::Arity { expected: 2, found: 1 })));
//! # Ok::<(), fx::Error>(())
//! ```

use crate::error::Error;
use crate::function::{Arguments, Function};
use crate::value::{FromValue, Value};

/// Checks the frame shape and hands back its positional values in order.
fn positional_values(
    arguments: Arguments,
    expected: usize,
) -> Result<impl Iterator<Item = Value>, Error> {
    arguments.expect_no_keywords()?;
    arguments.expect_arity(expected)?;
    let (positional, _) = arguments.into_parts();
    Ok(positional.into_iter())
}

macro_rules! impl_lift {
    ($arity:literal $(, $parameter:ident : $type:ident)*) => {
        paste::paste! {
            impl Function {
                #[doc = concat!("Lifts a closure of ", stringify!($arity), " typed argument(s).")]
                #[must_use]
                #[allow(unused_mut, unused_variables)]
                pub fn [<lift $arity>]<$($type,)* R, F>(function: F) -> Self
                where
                    F: Fn($($type),*) -> R + 'static,
                    $($type: FromValue,)*
                    R: Into<Value>,
                {
                    Self::new(move |arguments: Arguments| {
                        let mut values = positional_values(arguments, $arity)?;
                        $(
                            let $parameter = $type::from_value(values.next().ok_or(Error::Arity {
                                expected: $arity,
                                found: 0,
                            })?)?;
                        )*
                        Ok(function($($parameter),*).into())
                    })
                }

                #[doc = concat!("Lifts a fallible closure of ", stringify!($arity), " typed argument(s).")]
                #[must_use]
                #[allow(unused_mut, unused_variables)]
                pub fn [<try_lift $arity>]<$($type,)* R, F>(function: F) -> Self
                where
                    F: Fn($($type),*) -> Result<R, Error> + 'static,
                    $($type: FromValue,)*
                    R: Into<Value>,
                {
                    Self::new(move |arguments: Arguments| {
                        let mut values = positional_values(arguments, $arity)?;
                        $(
                            let $parameter = $type::from_value(values.next().ok_or(Error::Arity {
                                expected: $arity,
                                found: 0,
                            })?)?;
                        )*
                        function($($parameter),*).map(Into::into)
                    })
                }
            }
        }
    };
}

impl_lift!(0);
impl_lift!(1, first: A);
impl_lift!(2, first: A, second: B);
impl_lift!(3, first: A, second: B, third: C);
impl_lift!(4, first: A, second: B, third: C, fourth: D);

impl Function {
    /// Lifts a closure over all positional arguments.
    ///
    /// Keyword arguments are rejected.
    ///
    /// ```rust
    /// use fx::function::Function;
    /// use fx::Value;
    ///
    /// let maximum = Function::variadic(|values: &[Value]| {
    ///     let mut numbers = Vec::with_capacity(values.len());
    ///     for value in values {
    ///         numbers.push(value.clone().extract::<i64>()?);
    ///     }
    ///     Ok(numbers.into_iter().max().into())
    /// });
    /// assert_eq!(maximum.invoke((6, 1, 9))?, Value::from(9));
    /// assert_eq!(maximum.value()?, Value::Nil);
    /// # Ok::<(), fx::Error>(())
    /// ```
    #[must_use]
    pub fn variadic<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + 'static,
    {
        Self::new(move |arguments: Arguments| {
            arguments.expect_no_keywords()?;
            function(arguments.positional())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lift0_is_a_thunk() {
        let answer = Function::lift0(|| 42);
        assert_eq!(answer.value(), Ok(Value::from(42)));
    }

    #[test]
    fn test_lift3_passes_arguments_in_order() {
        let join = Function::lift3(|first: String, second: String, third: String| {
            format!("{first}{second}{third}")
        });
        assert_eq!(join.invoke(("a", "b", "c")), Ok(Value::from("abc")));
    }

    #[test]
    fn test_lift_rejects_keywords() {
        let negate = Function::lift1(|value: i64| -value);
        assert_eq!(
            negate.invoke(crate::args![1; sign = -1]),
            Err(Error::UnexpectedKeyword {
                name: "sign".to_string(),
            })
        );
    }

    #[test]
    fn test_lift_reports_type_mismatch() {
        let negate = Function::lift1(|value: i64| -value);
        assert_eq!(
            negate.invoke(("one",)),
            Err(Error::TypeMismatch {
                expected: "int",
                found: "str",
            })
        );
    }

    #[test]
    fn test_lift4_arity() {
        let sum = Function::lift4(|a: i64, b: i64, c: i64, d: i64| a + b + c + d);
        assert_eq!(sum.invoke((1, 2, 3, 4)), Ok(Value::from(10)));
        assert_eq!(
            sum.invoke((1, 2)),
            Err(Error::Arity {
                expected: 4,
                found: 2,
            })
        );
    }
}
