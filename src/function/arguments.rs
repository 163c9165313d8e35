//! Call frames for wrapped operations.
//!
//! An [`Arguments`] value carries the positional and keyword arguments of one
//! invocation. Partial application merges frames and argument reversal
//! reverses their positional part; nothing else touches them between the
//! caller and the held operation.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::Error;
use crate::value::{FromValue, Value};

/// Positional argument storage. Most calls take a handful of arguments, so
/// they live inline.
pub type Positional = SmallVec<[Value; 4]>;

/// Keyword argument storage.
pub type Keywords = FxHashMap<String, Value>;

/// The arguments of one invocation.
///
/// # Examples
///
/// ```rust
/// use fx::args;
/// use fx::function::Arguments;
///
/// let arguments = args![1, 2; base = 16];
/// assert_eq!(arguments.len(), 2);
/// assert_eq!(arguments.keyword("base").and_then(|value| value.as_int()), Some(16));
///
/// let same: Arguments = (1, 2).into();
/// assert_eq!(same.positional(), arguments.positional());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Positional,
    keywords: Keywords,
}

impl Arguments {
    /// Creates an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frame holding a single positional argument.
    #[must_use]
    pub fn one(value: impl Into<Value>) -> Self {
        let mut arguments = Self::new();
        arguments.push(value);
        arguments
    }

    /// Appends a positional argument.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Sets a keyword argument, replacing any previous value under `name`.
    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// The positional arguments, in call order.
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// The keyword arguments.
    #[must_use]
    pub const fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// The positional argument at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// The keyword argument called `name`.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// The number of positional arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// Returns `true` if there are neither positional nor keyword arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    /// Splits the frame into its positional and keyword parts.
    #[must_use]
    pub fn into_parts(self) -> (Positional, Keywords) {
        (self.positional, self.keywords)
    }

    /// Fails unless there are exactly `expected` positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] on a count mismatch.
    pub fn expect_arity(&self, expected: usize) -> Result<(), Error> {
        if self.positional.len() == expected {
            Ok(())
        } else {
            Err(Error::Arity {
                expected,
                found: self.positional.len(),
            })
        }
    }

    /// Fails if any keyword argument was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedKeyword`] naming the alphabetically first
    /// keyword.
    pub fn expect_no_keywords(&self) -> Result<(), Error> {
        match self.keywords.keys().min() {
            Some(name) => Err(Error::UnexpectedKeyword { name: name.clone() }),
            None => Ok(()),
        }
    }

    /// Extracts the positional argument at `index` as a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] if there is no argument at `index`, or
    /// [`Error::TypeMismatch`] if it has the wrong kind.
    pub fn take<T: FromValue>(&self, index: usize) -> Result<T, Error> {
        let value = self.positional.get(index).ok_or(Error::Arity {
            expected: index + 1,
            found: self.positional.len(),
        })?;
        T::from_value(value.clone())
    }

    /// Merges a later call into this bound frame.
    ///
    /// Positional arguments of `supplied` follow the bound ones; keyword
    /// arguments are united, with `supplied` winning on a name clash.
    ///
    /// ```rust
    /// use fx::args;
    ///
    /// let bound = args![1; base = 2, sign = -1];
    /// let merged = bound.merge(args![2; base = 16]);
    /// assert_eq!(merged, args![1, 2; base = 16, sign = -1]);
    /// ```
    #[must_use]
    pub fn merge(&self, supplied: Self) -> Self {
        let mut positional = self.positional.clone();
        positional.extend(supplied.positional);
        let mut keywords = self.keywords.clone();
        keywords.extend(supplied.keywords);
        Self {
            positional,
            keywords,
        }
    }

    /// Reverses the positional arguments; keywords are untouched.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.positional.reverse();
        self
    }
}

impl From<()> for Arguments {
    fn from((): ()) -> Self {
        Self::new()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arguments {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Arguments {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for Arguments {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keywords: Keywords::default(),
        }
    }
}

macro_rules! impl_from_tuple {
    ($($element:ident),+) => {
        impl<$($element: Into<Value>),+> From<($($element,)+)> for Arguments {
            #[allow(non_snake_case)]
            fn from(($($element,)+): ($($element,)+)) -> Self {
                let mut arguments = Self::new();
                $(arguments.push($element);)+
                arguments
            }
        }
    };
}

impl_from_tuple!(A);
impl_from_tuple!(A, B);
impl_from_tuple!(A, B, C);
impl_from_tuple!(A, B, C, D);
impl_from_tuple!(A, B, C, D, E);
impl_from_tuple!(A, B, C, D, E, F);

/// Builds an [`Arguments`] frame.
///
/// Positional arguments come first; keyword arguments follow a `;`.
///
/// # Syntax
///
/// - `args![]` - no arguments
/// - `args![a, b]` - positional arguments
/// - `args![a, b; name = value]` - positional and keyword arguments
/// - `args![; name = value]` - keyword arguments only
///
/// # Examples
///
/// ```rust
/// use fx::args;
///
/// let arguments = args!["ff"; base = 16];
/// assert_eq!(arguments.len(), 1);
/// assert!(arguments.keyword("base").is_some());
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* ; $($name:ident = $keyword:expr),+ $(,)?) => {{
        #[allow(unused_mut)]
        let mut arguments = $crate::function::Arguments::new();
        $(arguments.push($value);)*
        $(let arguments = arguments.with_keyword(stringify!($name), $keyword);)+
        arguments
    }};
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut arguments = $crate::function::Arguments::new();
        $(arguments.push($value);)*
        arguments
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_conversion_keeps_order() {
        let arguments: Arguments = (1, "two", 3.0).into();
        assert_eq!(
            arguments.positional(),
            &[Value::from(1), Value::from("two"), Value::from(3.0)]
        );
    }

    #[test]
    fn test_reversed_keeps_keywords() {
        let arguments = args![1, 2, 3; flag = true].reversed();
        assert_eq!(arguments, args![3, 2, 1; flag = true]);
    }

    #[test]
    fn test_take_out_of_range_is_arity_error() {
        let arguments = args![1];
        assert_eq!(
            arguments.take::<i64>(2),
            Err(Error::Arity {
                expected: 3,
                found: 1,
            })
        );
    }

    #[test]
    fn test_expect_no_keywords_reports_first_name() {
        let arguments = args![; zeta = 1, alpha = 2];
        assert_eq!(
            arguments.expect_no_keywords(),
            Err(Error::UnexpectedKeyword {
                name: "alpha".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_frame() {
        assert!(Arguments::from(()).is_empty());
        assert!(!args![; key = 1].is_empty());
        assert_eq!(args![; key = 1].len(), 0);
    }
}
