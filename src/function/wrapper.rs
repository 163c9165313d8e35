//! The [`Function`] wrapper.

use std::rc::Rc;

use crate::error::Error;
use crate::function::Arguments;
use crate::value::Value;

/// The signature every wrapped operation is adapted to.
type Operation = dyn Fn(Arguments) -> Result<Value, Error>;

/// A wrapped callable with composition, piping, partial application and
/// argument reversal.
///
/// Every combinator returns a new `Function`; the receiver is never changed.
/// Cloning shares the held operation.
///
/// # Examples
///
/// ```rust
/// use fx::function::Function;
/// use fx::Value;
///
/// let add = Function::lift2(|left: i64, right: i64| left + right);
/// let double = Function::lift1(|value: i64| value * 2);
///
/// // double(add(1, 2))
/// let add_then_double = double.compose(add.clone());
/// assert_eq!(add_then_double.invoke((1, 2))?, Value::from(6));
///
/// // add(1, _) piped into double
/// let succ_then_double = add.apply((1,)).pipe(double);
/// assert_eq!(succ_then_double.invoke((4,))?, Value::from(10));
/// # Ok::<(), fx::Error>(())
/// ```
#[derive(Clone)]
pub struct Function {
    operation: Rc<Operation>,
}

static_assertions::assert_not_impl_any!(Function: Send, Sync);

impl Function {
    /// Wraps an operation taking an [`Arguments`] frame.
    ///
    /// ```rust
    /// use fx::function::{Arguments, Function};
    /// use fx::Value;
    ///
    /// let count = Function::new(|arguments: Arguments| Ok(Value::from(arguments.len())));
    /// assert_eq!(count.invoke((1, 2, 3))?, Value::from(3));
    /// # Ok::<(), fx::Error>(())
    /// ```
    #[must_use]
    pub fn new<F>(operation: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value, Error> + 'static,
    {
        Self {
            operation: Rc::new(operation),
        }
    }

    /// Wraps a value.
    ///
    /// A [`Value::Function`] hands over its held operation as is, so wrapping
    /// a wrapper never adds a layer. Any other value becomes a constant.
    ///
    /// ```rust
    /// use fx::function::Function;
    /// use fx::Value;
    ///
    /// let answer = Function::wrap(42);
    /// assert_eq!(answer.value()?, Value::from(42));
    ///
    /// let same = Function::wrap(Value::from(answer.clone()));
    /// assert!(same.ptr_eq(&answer));
    /// # Ok::<(), fx::Error>(())
    /// ```
    #[must_use]
    pub fn wrap(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Function(function) => function,
            other => Self::constant(other),
        }
    }

    /// A zero-argument operation that always returns `value`.
    #[must_use]
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |arguments: Arguments| {
            arguments.expect_no_keywords()?;
            arguments.expect_arity(0)?;
            Ok(value.clone())
        })
    }

    /// An operation returning its single positional argument.
    #[must_use]
    pub fn identity() -> Self {
        Self::lift1(|value: Value| value)
    }

    /// Calls the held operation.
    ///
    /// # Errors
    ///
    /// Returns whatever error the held operation returns, unchanged.
    pub fn invoke(&self, arguments: impl Into<Arguments>) -> Result<Value, Error> {
        let arguments = arguments.into();
        trace_event!(
            positional = arguments.len(),
            keywords = arguments.keywords().len(),
            "invoking wrapped operation"
        );
        (self.operation)(arguments)
    }

    /// Alias for [`invoke`](Self::invoke).
    ///
    /// # Errors
    ///
    /// Returns whatever error the held operation returns, unchanged.
    pub fn call(&self, arguments: impl Into<Arguments>) -> Result<Value, Error> {
        self.invoke(arguments)
    }

    /// Invokes with no arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the held operation returns, unchanged.
    pub fn value(&self) -> Result<Value, Error> {
        self.invoke(Arguments::new())
    }

    /// `self ∘ other`: invokes `other` with the arguments, then `self` on the
    /// result.
    ///
    /// `other` may be a `Function`, an operation closure or a [`Value`] (which
    /// is wrapped as by [`wrap`](Self::wrap)).
    #[must_use]
    pub fn compose(&self, other: impl Into<Self>) -> Self {
        let outer = Rc::clone(&self.operation);
        let inner = other.into().operation;
        Self::new(move |arguments| outer(Arguments::one(inner(arguments)?)))
    }

    /// Invokes `self`, then feeds the result to `other`.
    ///
    /// Defined as `other.compose(self)`.
    #[must_use]
    pub fn pipe(&self, other: impl Into<Self>) -> Self {
        other.into().compose(self.clone())
    }

    /// Binds leading positional arguments and default keyword arguments.
    ///
    /// Later positional arguments follow the bound ones; later keywords
    /// override bound keywords of the same name.
    ///
    /// ```rust
    /// use fx::args;
    /// use fx::function::{Arguments, Function};
    /// use fx::Value;
    ///
    /// let describe = Function::new(|arguments: Arguments| {
    ///     let unit = arguments.keyword("unit").cloned().unwrap_or(Value::from("m"));
    ///     Ok(Value::from(format!("{} {}", arguments.take::<i64>(0)?, unit.extract::<String>()?)))
    /// });
    /// let in_km = describe.apply(args![; unit = "km"]);
    /// assert_eq!(in_km.invoke((3,))?, Value::from("3 km"));
    /// assert_eq!(in_km.invoke(args![3; unit = "mi"])?, Value::from("3 mi"));
    /// # Ok::<(), fx::Error>(())
    /// ```
    #[must_use]
    pub fn apply(&self, arguments: impl Into<Arguments>) -> Self {
        let operation = Rc::clone(&self.operation);
        let bound = arguments.into();
        Self::new(move |supplied| operation(bound.merge(supplied)))
    }

    /// Reverses the positional arguments before calling the held operation.
    #[must_use]
    pub fn reverse_apply(&self) -> Self {
        let operation = Rc::clone(&self.operation);
        Self::new(move |arguments: Arguments| operation(arguments.reversed()))
    }

    /// Alias for [`reverse_apply`](Self::reverse_apply).
    #[must_use]
    pub fn flip(&self) -> Self {
        self.reverse_apply()
    }

    /// Compares the zero-argument result with `other`.
    ///
    /// A [`Value::Function`] is itself invoked with no arguments first, so two
    /// wrappers compare by their results.
    ///
    /// # Errors
    ///
    /// Returns whatever error either invocation returns.
    pub fn equals(&self, other: impl Into<Value>) -> Result<bool, Error> {
        let output = self.value()?;
        let expected = match other.into() {
            Value::Function(function) => function.value()?,
            value => value,
        };
        Ok(output == expected)
    }

    /// Membership test on the zero-argument result.
    ///
    /// Uses the result's own "contains" query when it has one, and plain
    /// equality with the result otherwise. A result that is itself a function
    /// is searched in turn.
    ///
    /// # Errors
    ///
    /// Returns whatever error the held operation returns.
    pub fn contains(&self, needle: impl Into<Value>) -> Result<bool, Error> {
        let output = self.value()?;
        let needle = needle.into();
        Ok(output.contains(&needle)?.unwrap_or_else(|| needle == output))
    }

    /// Iterates the zero-argument result.
    ///
    /// An iterable result is iterated; any other result is yielded once. A
    /// result that is itself a function is iterated in turn. Every call invokes
    /// the held operation again.
    ///
    /// # Errors
    ///
    /// Returns whatever error the held operation returns.
    pub fn iterate(&self) -> Result<Box<dyn Iterator<Item = Value>>, Error> {
        let output = self.value()?;
        Ok(match output.iterate()? {
            Some(items) => items,
            None => Box::new(std::iter::once(output)),
        })
    }

    /// Returns `true` if both wrappers hold the same operation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.operation, &other.operation)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Function").finish_non_exhaustive()
    }
}

impl<F> From<F> for Function
where
    F: Fn(Arguments) -> Result<Value, Error> + 'static,
{
    fn from(operation: F) -> Self {
        Self::new(operation)
    }
}

impl From<Value> for Function {
    fn from(value: Value) -> Self {
        Self::wrap(value)
    }
}
