//! The [`ItemGetter`] accessor.

use std::rc::Rc;

use crate::error::Error;
#[cfg(feature = "function")]
use crate::function::{Arguments, Function};
use crate::itemgetter::{Slice, Subscript};
use crate::value::{Capability, Value};

/// A deferred chain of subscripts, replayed against a value on demand.
///
/// Subscripting never changes the receiver: [`at`](Self::at) returns a new
/// getter with one more subscript, so partial chains can be shared and
/// extended independently. A getter holds only plain data and is
/// `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use fx::itemgetter::X;
/// use fx::Value;
///
/// let car = X.at(0);
/// let cdr = X.at(1..);
/// let cadr = cdr.at(0);
///
/// let items = Value::from(vec![1, 2, 3]);
/// assert_eq!(car.apply(items.clone())?, Value::from(1));
/// assert_eq!(cdr.apply(items.clone())?, Value::from(vec![2, 3]));
/// assert_eq!(cadr.apply(items)?, Value::from(2));
///
/// let get_name = X.at("name");
/// let person = Value::map([("name", Value::from("Joe")), ("age", Value::from(42))]);
/// assert_eq!(get_name.apply(person)?, Value::from("Joe"));
/// # Ok::<(), fx::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ItemGetter {
    subscripts: Vec<Subscript>,
}

static_assertions::assert_impl_all!(ItemGetter: Send, Sync);

impl ItemGetter {
    /// Creates a getter with no subscripts, which returns its input unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscripts: Vec::new(),
        }
    }

    /// Returns a new getter with `subscript` appended.
    ///
    /// Accepts keys, indices, [`Slice`]s and Rust ranges.
    #[must_use]
    pub fn at(&self, subscript: impl Into<Subscript>) -> Self {
        let mut subscripts = Vec::with_capacity(self.subscripts.len() + 1);
        subscripts.extend_from_slice(&self.subscripts);
        subscripts.push(subscript.into());
        Self { subscripts }
    }

    /// Returns a new getter with a slice appended.
    ///
    /// ```rust
    /// use fx::itemgetter::X;
    /// use fx::Value;
    ///
    /// let reversed = X.slice(None, None, Some(-1));
    /// assert_eq!(reversed.apply("abc")?, Value::from("cba"));
    /// # Ok::<(), fx::Error>(())
    /// ```
    #[must_use]
    pub fn slice(&self, start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        self.at(Slice::new(start, stop, step))
    }

    /// The recorded subscripts, oldest first.
    #[must_use]
    pub const fn subscripts(&self) -> &[Subscript] {
        self.subscripts.as_slice()
    }

    /// The number of recorded subscripts.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.subscripts.len()
    }

    /// Returns `true` if no subscript has been recorded.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.subscripts.is_empty()
    }

    /// Replays the subscripts against `value`, left to right.
    ///
    /// # Errors
    ///
    /// Returns the error of the first subscript that cannot be resolved.
    pub fn apply(&self, value: impl Into<Value>) -> Result<Value, Error> {
        trace_event!(depth = self.depth(), "replaying item getter");
        self.subscripts
            .iter()
            .try_fold(value.into(), resolve)
    }
}

fn resolve(value: Value, subscript: &Subscript) -> Result<Value, Error> {
    match value.capability() {
        Capability::Mapping | Capability::Sequence => {
            trace_event!(subscript = %subscript, strategy = "native", "resolving subscript");
            native(&value, subscript)
        }
        Capability::IterableOnly => forward(value, subscript),
        Capability::Scalar => Err(Error::NotSubscriptable {
            type_name: value.type_name(),
        }),
    }
}

fn native(value: &Value, subscript: &Subscript) -> Result<Value, Error> {
    let invalid = || Error::InvalidKey {
        key: subscript.to_string(),
        target: value.type_name(),
    };
    match (value, subscript) {
        (Value::Map(entries), Subscript::Key(key)) => {
            entries.get(key).cloned().ok_or_else(|| Error::MissingKey {
                key: key.clone(),
            })
        }
        (Value::List(items), Subscript::Key(key)) => {
            let index = key.as_index().ok_or_else(invalid)?;
            Ok(items[position(index, items.len())?].clone())
        }
        (Value::List(items), Subscript::Slice(slice)) => {
            Ok(Value::List(Rc::from(slice.select(items, "list")?)))
        }
        (Value::Str(text), Subscript::Key(key)) => {
            let index = key.as_index().ok_or_else(invalid)?;
            let characters: Vec<char> = text.chars().collect();
            Ok(Value::from(characters[position(index, characters.len())?]))
        }
        (Value::Str(text), Subscript::Slice(slice)) => {
            let characters: Vec<char> = text.chars().collect();
            let selected: String = slice.select(&characters, "str")?.into_iter().collect();
            Ok(Value::from(selected))
        }
        _ => Err(invalid()),
    }
}

/// Resolves `index` against a sequence of `length`, counting negative indices
/// from the end.
fn position(index: i64, length: usize) -> Result<usize, Error> {
    let position = if index < 0 {
        usize::try_from(index.unsigned_abs())
            .ok()
            .and_then(|back| length.checked_sub(back))
    } else {
        usize::try_from(index).ok()
    };
    position
        .filter(|position| *position < length)
        .ok_or(Error::IndexOutOfRange { index })
}

fn forward(value: Value, subscript: &Subscript) -> Result<Value, Error> {
    let invalid = || Error::InvalidKey {
        key: subscript.to_string(),
        target: "stream",
    };
    let mut stream = match value {
        Value::Stream(stream) => stream,
        #[cfg(feature = "function")]
        Value::Function(function) => crate::value::Stream::new(function.iterate()?),
        other => {
            return Err(Error::NotSubscriptable {
                type_name: other.type_name(),
            });
        }
    };
    match subscript {
        Subscript::Slice(slice) => {
            trace_event!(subscript = %subscript, strategy = "lazy slice", "resolving subscript");
            slice.lazy(stream).map(Value::Stream)
        }
        Subscript::Key(key) => {
            trace_event!(subscript = %subscript, strategy = "scan", "resolving subscript");
            let index = key.as_index().ok_or_else(invalid)?;
            let skip = usize::try_from(index).map_err(|_| invalid())?;
            stream.nth(skip).ok_or(Error::IndexOutOfRange { index })
        }
    }
}

impl std::fmt::Display for ItemGetter {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("_")?;
        for subscript in &self.subscripts {
            write!(formatter, "{subscript}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "function")]
impl From<ItemGetter> for Function {
    fn from(getter: ItemGetter) -> Self {
        Self::new(move |arguments: Arguments| {
            arguments.expect_no_keywords()?;
            arguments.expect_arity(1)?;
            getter.apply(arguments.take::<Value>(0)?)
        })
    }
}

#[cfg(feature = "function")]
impl From<&ItemGetter> for Function {
    fn from(getter: &ItemGetter) -> Self {
        Self::from(getter.clone())
    }
}

#[cfg(feature = "function")]
impl From<ItemGetter> for Value {
    fn from(getter: ItemGetter) -> Self {
        Self::Function(getter.into())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ItemGetter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.subscripts.len()))?;
        for subscript in &self.subscripts {
            sequence.serialize_element(subscript)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct ItemGetterVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ItemGetterVisitor {
    type Value = ItemGetter;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a sequence of subscripts")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut subscripts = Vec::with_capacity(sequence.size_hint().unwrap_or(0));
        while let Some(subscript) = sequence.next_element::<Subscript>()? {
            subscripts.push(subscript);
        }
        Ok(ItemGetter { subscripts })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ItemGetter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ItemGetterVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Key, Stream};
    use rstest::rstest;

    fn numbers() -> Value {
        Value::from(vec![1, 2, 3, 4, 5])
    }

    #[rstest]
    #[case(ItemGetter::new().at(0), Value::from(1))]
    #[case(ItemGetter::new().at(-1), Value::from(5))]
    #[case(ItemGetter::new().at(1..), Value::from(vec![2, 3, 4, 5]))]
    #[case(ItemGetter::new().at(Slice::full().with_step(2)), Value::from(vec![1, 3, 5]))]
    #[case(ItemGetter::new().at(1..).at(0), Value::from(2))]
    #[case(ItemGetter::new(), numbers())]
    fn test_apply_on_list(#[case] getter: ItemGetter, #[case] expected: Value) {
        assert_eq!(getter.apply(numbers()), Ok(expected));
    }

    #[rstest]
    #[case(ItemGetter::new().at(5), Error::IndexOutOfRange { index: 5 })]
    #[case(ItemGetter::new().at(-6), Error::IndexOutOfRange { index: -6 })]
    #[case(
        ItemGetter::new().at("name"),
        Error::InvalidKey { key: "[\"name\"]".to_string(), target: "list" }
    )]
    #[case(
        ItemGetter::new().at(0).at(0),
        Error::NotSubscriptable { type_name: "int" }
    )]
    fn test_apply_errors_on_list(#[case] getter: ItemGetter, #[case] expected: Error) {
        assert_eq!(getter.apply(numbers()), Err(expected));
    }

    #[test]
    fn test_at_does_not_change_receiver() {
        let head = ItemGetter::new().at(0);
        let deeper = head.at(1);
        assert_eq!(head.depth(), 1);
        assert_eq!(deeper.depth(), 2);
        assert_eq!(deeper.subscripts()[0], Subscript::from(0));
    }

    #[test]
    fn test_missing_map_key() {
        let person = Value::map([("name", "Joe")]);
        assert_eq!(
            ItemGetter::new().at("age").apply(person),
            Err(Error::MissingKey {
                key: Key::from("age"),
            })
        );
    }

    #[test]
    fn test_string_index_counts_characters() {
        let getter = ItemGetter::new().at(1);
        assert_eq!(getter.apply("héllo"), Ok(Value::from("é")));
    }

    #[test]
    fn test_stream_index_pulls_only_what_it_needs() {
        let stream = Stream::count_from(0);
        assert_eq!(
            ItemGetter::new().at(3).apply(stream.clone()),
            Ok(Value::from(3))
        );
        let mut rest = stream;
        assert_eq!(rest.next(), Some(Value::from(4)));
    }

    #[test]
    fn test_stream_rejects_string_key() {
        assert_eq!(
            ItemGetter::new().at("name").apply(Stream::count_from(0)),
            Err(Error::InvalidKey {
                key: "[\"name\"]".to_string(),
                target: "stream",
            })
        );
    }

    #[test]
    fn test_display() {
        let getter = ItemGetter::new()
            .at(0)
            .at(1..)
            .at(Slice::full().with_step(2))
            .at("name");
        assert_eq!(getter.to_string(), "_[0][1:][::2][\"name\"]");
        assert_eq!(ItemGetter::new().to_string(), "_");
    }

    #[cfg(feature = "function")]
    #[test]
    fn test_into_function() {
        let second = Function::from(ItemGetter::new().at(1));
        assert_eq!(second.invoke((numbers(),)), Ok(Value::from(2)));
        assert!(matches!(
            second.value(),
            Err(Error::Arity {
                expected: 1,
                found: 0,
            })
        ));
    }
}
