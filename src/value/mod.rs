//! The dynamic value model.
//!
//! Wrapped operations take and return [`Value`]s, and item getters replay their
//! subscripts against them. Each value resolves to exactly one [`Capability`],
//! which is what both the item getter and the wrapper's membership and
//! iteration support dispatch on.
//!
//! # Capabilities
//!
//! ```text
//! Map                      -> Mapping       keyed lookup
//! Str, List                -> Sequence      indexing, slicing, iteration
//! Stream, Function         -> IterableOnly  forward-only iteration
//! Nil, Bool, Int, Float    -> Scalar        none
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fx::value::{Capability, Value};
//!
//! let numbers = Value::from(vec![1, 2, 3]);
//! assert_eq!(numbers.capability(), Capability::Sequence);
//! assert_eq!(numbers.to_string(), "[1, 2, 3]");
//!
//! let total: i64 = Value::from(6).extract().unwrap();
//! assert_eq!(total, 6);
//! ```

mod key;
mod stream;

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::rc::Rc;

use rustc_hash::FxHashMap;

pub use key::Key;
pub use stream::Stream;

use crate::error::Error;
#[cfg(feature = "function")]
use crate::function::Function;

/// What kind of access a value supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Keyed lookup by [`Key`].
    Mapping,
    /// Random access by index and slice, with a known length.
    Sequence,
    /// Forward-only iteration with no length.
    IterableOnly,
    /// Neither keyed access nor iteration.
    Scalar,
}

/// A dynamically typed value.
///
/// Compound variants are reference counted, so cloning a value is cheap and
/// never copies its contents.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value.
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// An immutable string, indexed by character.
    Str(Rc<str>),
    /// An immutable list.
    List(Rc<[Value]>),
    /// An immutable hash map.
    Map(Rc<FxHashMap<Key, Value>>),
    /// A forward-only lazy source.
    Stream(Stream),
    /// A wrapped callable.
    #[cfg(feature = "function")]
    Function(Function),
}

impl Value {
    /// Builds a list from anything convertible into values.
    ///
    /// ```rust
    /// use fx::Value;
    ///
    /// let list = Value::list(1..=3);
    /// assert_eq!(list, Value::from(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map from key/value pairs.
    ///
    /// ```rust
    /// use fx::Value;
    ///
    /// let person = Value::map([("name", Value::from("Joe")), ("age", Value::from(42))]);
    /// assert_eq!(person.as_map().map(|entries| entries.len()), Some(2));
    /// ```
    #[must_use]
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Self>,
    {
        Self::Map(Rc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Wraps an iterator as a forward-only [`Stream`].
    #[must_use]
    pub fn stream<I, T>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
        T: Into<Self> + 'static,
    {
        Self::Stream(Stream::new(iterable))
    }

    /// Resolves the access capability of this value.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        match self {
            Self::Map(_) => Capability::Mapping,
            Self::Str(_) | Self::List(_) => Capability::Sequence,
            Self::Stream(_) => Capability::IterableOnly,
            #[cfg(feature = "function")]
            Self::Function(_) => Capability::IterableOnly,
            _ => Capability::Scalar,
        }
    }

    /// The kind of value, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Stream(_) => "stream",
            #[cfg(feature = "function")]
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the integer, if this is an [`Value::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(&**text),
            _ => None,
        }
    }

    /// Returns the elements, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(&**items),
            _ => None,
        }
    }

    /// Returns the entries, if this is a [`Value::Map`].
    #[must_use]
    pub fn as_map(&self) -> Option<&FxHashMap<Key, Self>> {
        match self {
            Self::Map(entries) => Some(&**entries),
            _ => None,
        }
    }

    /// Converts into a typed Rust value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value has the wrong kind.
    pub fn extract<T: FromValue>(self) -> Result<T, Error> {
        T::from_value(self)
    }

    /// Membership test using the value's own "contains" query.
    ///
    /// Returns `Ok(None)` if the value has no such query for `needle`:
    /// scalars, strings searched for a non-string, and maps searched for an
    /// unhashable value. Searching a stream consumes it up to the first match.
    /// A function is invoked and its result searched, as by
    /// [`Function::contains`].
    ///
    /// ```rust
    /// use fx::Value;
    ///
    /// assert_eq!(Value::from("spam").contains(&Value::from("pa"))?, Some(true));
    /// assert_eq!(Value::from(vec![1, 2]).contains(&Value::from(3))?, Some(false));
    /// assert_eq!(Value::from(42).contains(&Value::from(42))?, None);
    /// # Ok::<(), fx::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns whatever error invoking a function value returns.
    pub fn contains(&self, needle: &Self) -> Result<Option<bool>, Error> {
        Ok(match self {
            Self::List(items) => Some(items.iter().any(|item| item == needle)),
            Self::Str(text) => needle.as_str().map(|pattern| text.contains(pattern)),
            Self::Map(entries) => Key::try_from(needle)
                .ok()
                .map(|key| entries.contains_key(&key)),
            Self::Stream(stream) => Some(stream.clone().any(|item| item == *needle)),
            #[cfg(feature = "function")]
            Self::Function(function) => Some(function.contains(needle.clone())?),
            _ => None,
        })
    }

    /// Iterates the elements of an iterable value.
    ///
    /// Lists yield their elements, strings their characters, maps their keys
    /// and streams their remaining items. A function is invoked and its result
    /// iterated, as by [`Function::iterate`]. Returns `Ok(None)` for scalars.
    ///
    /// # Errors
    ///
    /// Returns whatever error invoking a function value returns.
    pub fn iterate(&self) -> Result<Option<Box<dyn Iterator<Item = Self>>>, Error> {
        Ok(match self {
            Self::List(items) => {
                let items = Rc::clone(items);
                Some(Box::new(
                    (0..items.len()).map(move |index| items[index].clone()),
                ))
            }
            Self::Str(text) => {
                let characters: Vec<Self> = text.chars().map(Self::from).collect();
                Some(Box::new(characters.into_iter()))
            }
            Self::Map(entries) => {
                let keys: Vec<Self> = entries.keys().cloned().map(Self::from).collect();
                Some(Box::new(keys.into_iter()))
            }
            Self::Stream(stream) => Some(Box::new(stream.clone())),
            #[cfg(feature = "function")]
            Self::Function(function) => Some(function.iterate()?),
            _ => None,
        })
    }
}

/// Compares an integer with a float exactly, without rounding either side.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn int_equals_float(integer: i64, float: f64) -> bool {
    // 2^63: `i64::MIN` is exact, `i64::MAX` is not representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    float.fract() == 0.0 && (-LIMIT..LIMIT).contains(&float) && float as i64 == integer
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Int(left), Self::Float(right)) | (Self::Float(right), Self::Int(left)) => {
                int_equals_float(*left, *right)
            }
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Map(left), Self::Map(right)) => left == right,
            (Self::Stream(left), Self::Stream(right)) => left.ptr_eq(right),
            #[cfg(feature = "function")]
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number:?}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
            Self::List(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Map(entries) => {
                // Sorted so the output is stable across runs.
                let mut sorted: Vec<(&Key, &Self)> = entries.iter().collect();
                sorted.sort_unstable_by_key(|entry| entry.0);
                formatter.write_str("{")?;
                for (index, (key, item)) in sorted.into_iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {item}")?;
                }
                formatter.write_str("}")
            }
            Self::Stream(_) => formatter.write_str("<stream>"),
            #[cfg(feature = "function")]
            Self::Function(_) => formatter.write_str("<function>"),
        }
    }
}

// =============================================================================
// Conversions into Value
// =============================================================================

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Int(i64::try_from(number).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::Str(Rc::from(character.to_string()))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<Rc<str>> for Value {
    fn from(text: Rc<str>) -> Self {
        Self::Str(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nil, Into::into)
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<Key>,
    V: Into<Self>,
    S: BuildHasher,
{
    fn from(entries: HashMap<K, V, S>) -> Self {
        Self::map(entries)
    }
}

impl From<Stream> for Value {
    fn from(stream: Stream) -> Self {
        Self::Stream(stream)
    }
}

#[cfg(feature = "function")]
impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

// =============================================================================
// Conversions out of Value
// =============================================================================

/// Typed extraction from a [`Value`].
///
/// Used by [`Function::lift1`](crate::function::Function::lift1) and friends
/// to turn dynamic arguments into the parameter types of a Rust closure.
pub trait FromValue: Sized {
    /// Converts `value`, failing if it has the wrong kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value has the wrong kind.
    fn from_value(value: Value) -> Result<Self, Error>;
}

const fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, Error> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Int(number) => Ok(number),
            other => Err(mismatch("int", &other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Int(number) => Self::try_from(number).map_err(|_| Error::TypeMismatch {
                expected: "32-bit int",
                found: "int",
            }),
            other => Err(mismatch("int", &other)),
        }
    }
}

impl FromValue for u32 {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Int(number) => Self::try_from(number).map_err(|_| Error::TypeMismatch {
                expected: "32-bit unsigned int",
                found: "int",
            }),
            other => Err(mismatch("int", &other)),
        }
    }
}

impl FromValue for usize {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Int(number) => Self::try_from(number).map_err(|_| Error::TypeMismatch {
                expected: "non-negative int",
                found: "int",
            }),
            other => Err(mismatch("non-negative int", &other)),
        }
    }
}

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Float(number) => Ok(number),
            Value::Int(number) => Ok(number as Self),
            other => Err(mismatch("float", &other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Str(text) => Ok(text.to_string()),
            other => Err(mismatch("str", &other)),
        }
    }
}

impl FromValue for Rc<str> {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Str(text) => Ok(text),
            other => Err(mismatch("str", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::List(items) => items.iter().cloned().map(T::from_value).collect(),
            other => Err(mismatch("list", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl FromValue for FxHashMap<Key, Value> {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Map(entries) => Ok((*entries).clone()),
            other => Err(mismatch("map", &other)),
        }
    }
}

impl FromValue for Stream {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Stream(stream) => Ok(stream),
            other => Err(mismatch("stream", &other)),
        }
    }
}

#[cfg(feature = "function")]
impl FromValue for Function {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Function(function) => Ok(function),
            other => Err(mismatch("function", &other)),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Maps are written with their keys unchanged. Formats restricted to string
/// keys, such as JSON, write integer keys as strings, and those come back as
/// [`Key::Str`]: `{2: 4}` round-trips to `{"2": 4}`.
#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{Error as _, SerializeMap, SerializeSeq};

        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::Str(text) => serializer.serialize_str(text),
            Self::List(items) => {
                let mut sequence = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    sequence.serialize_element(item)?;
                }
                sequence.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, item) in entries.iter() {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
            other => Err(S::Error::custom(format_args!(
                "cannot serialize a {}",
                other.type_name()
            ))),
        }
    }
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a nil, bool, number, string, sequence or map")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E>(self, flag: bool) -> Result<Value, E> {
        Ok(Value::Bool(flag))
    }

    fn visit_i64<E>(self, number: i64) -> Result<Value, E> {
        Ok(Value::Int(number))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, number: u64) -> Result<Value, E> {
        Ok(i64::try_from(number).map_or(Value::Float(number as f64), Value::Int))
    }

    fn visit_f64<E>(self, number: f64) -> Result<Value, E> {
        Ok(Value::Float(number))
    }

    fn visit_str<E>(self, text: &str) -> Result<Value, E> {
        Ok(Value::from(text))
    }

    fn visit_string<E>(self, text: String) -> Result<Value, E> {
        Ok(Value::from(text))
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items.into()))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = FxHashMap::default();
        while let Some((key, item)) = access.next_entry::<Key, Value>()? {
            entries.insert(key, item);
        }
        Ok(Value::Map(Rc::new(entries)))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Nil, Capability::Scalar)]
    #[case(Value::from(1), Capability::Scalar)]
    #[case(Value::from(1.5), Capability::Scalar)]
    #[case(Value::from("abc"), Capability::Sequence)]
    #[case(Value::from(vec![1, 2]), Capability::Sequence)]
    #[case(Value::map([("a", 1)]), Capability::Mapping)]
    #[case(Value::stream(0..3), Capability::IterableOnly)]
    fn test_capability(#[case] value: Value, #[case] expected: Capability) {
        assert_eq!(value.capability(), expected);
    }

    #[cfg(feature = "function")]
    #[test]
    fn test_function_is_iterable_only() {
        let value = Value::from(Function::wrap(vec![1, 2]));
        assert_eq!(value.capability(), Capability::IterableOnly);
        let items: Vec<Value> = value.iterate().unwrap().unwrap().collect();
        assert_eq!(items, vec![Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_streams_compare_by_identity() {
        let stream = Value::stream(0..3);
        assert_eq!(stream, stream.clone());
        assert_ne!(stream, Value::stream(0..3));
    }

    #[test]
    fn test_display_nested() {
        let value = Value::list([Value::from("a"), Value::from(vec![1.0, 2.5])]);
        assert_eq!(value.to_string(), "[\"a\", [1.0, 2.5]]");
    }

    #[test]
    fn test_display_map_is_sorted() {
        let value = Value::map([("b", 2), ("a", 1)]);
        assert_eq!(value.to_string(), "{\"a\": 1, \"b\": 2}");
    }

    #[rstest]
    #[case(1, 1.0, true)]
    #[case(-3, -3.0, true)]
    #[case(1, 1.5, false)]
    #[case(i64::MIN, -9_223_372_036_854_775_808.0, true)]
    #[case(i64::MAX, 9_223_372_036_854_775_808.0, false)]
    #[case(i64::MAX - 1, 9_223_372_036_854_775_808.0, false)]
    #[case(0, f64::NAN, false)]
    #[case(i64::MAX, f64::INFINITY, false)]
    fn test_int_float_equality_is_exact(
        #[case] integer: i64,
        #[case] float: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(Value::from(integer) == Value::from(float), expected);
        assert_eq!(Value::from(float) == Value::from(integer), expected);
    }

    #[test]
    fn test_iterate_string_yields_characters() {
        let characters: Vec<Value> = Value::from("abc").iterate().unwrap().unwrap().collect();
        assert_eq!(
            characters,
            vec![Value::from("a"), Value::from("b"), Value::from("c")]
        );
    }

    #[test]
    fn test_iterate_scalar_is_none() {
        assert!(Value::from(42).iterate().unwrap().is_none());
    }

    #[test]
    fn test_contains_map_checks_keys() {
        let value = Value::map([("name", "Joe")]);
        assert_eq!(value.contains(&Value::from("name")), Ok(Some(true)));
        assert_eq!(value.contains(&Value::from("Joe")), Ok(Some(false)));
        assert_eq!(value.contains(&Value::from(vec![1])), Ok(None));
    }

    #[test]
    fn test_contains_consumes_stream() {
        let value = Value::stream(1..=5);
        assert_eq!(value.contains(&Value::from(2)), Ok(Some(true)));
        let rest: Vec<i64> = value
            .iterate()
            .unwrap()
            .unwrap()
            .map(|item| item.as_int().unwrap())
            .collect();
        assert_eq!(rest, vec![3, 4, 5]);
    }

    #[test]
    fn test_extract_mismatch() {
        assert_eq!(
            Value::from("x").extract::<i64>(),
            Err(Error::TypeMismatch {
                expected: "int",
                found: "str",
            })
        );
    }

    #[test]
    fn test_extract_nested_list() {
        let value = Value::from(vec![vec![1, 2], vec![3]]);
        let nested: Vec<Vec<i64>> = value.extract().unwrap();
        assert_eq!(nested, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(Value::Nil.extract::<Option<i64>>(), Ok(None));
        assert_eq!(Value::from(3).extract::<Option<i64>>(), Ok(Some(3)));
    }
}
