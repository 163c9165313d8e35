#![cfg(feature = "itemgetter")]
//! Property-based tests for the item getter.
//!
//! - **Chaining**: `g.at(a).at(b).apply(v) == X.at(b).apply(g.at(a).apply(v))`
//! - **Native Indexing**: `X.at(i).apply(list) == list[i]` for in-range `i`
//! - **Stream Agreement**: forward access on a stream of a list matches
//!   native access on the list for non-negative subscripts
//! - **Immutability**: subscripting never changes the receiver

use fx::Value;
use fx::itemgetter::{ItemGetter, Slice, X};
use fx::value::Stream;
use proptest::prelude::*;

fn as_list(value: Value) -> Vec<Value> {
    value.iterate().unwrap().into_iter().flatten().collect()
}

proptest! {
    #[test]
    fn prop_chain_equals_successive_application(
        items in prop::collection::vec(prop::collection::vec(any::<i64>(), 1..5), 1..8),
        outer in any::<prop::sample::Index>(),
        inner in any::<prop::sample::Index>(),
    ) {
        let outer = outer.index(items.len());
        let inner = inner.index(items[outer].len());
        let value = Value::list(items.clone());

        let chained = X.at(outer).at(inner).apply(value.clone()).unwrap();
        let stepwise = X.at(inner).apply(X.at(outer).apply(value).unwrap()).unwrap();

        prop_assert_eq!(chained.clone(), stepwise);
        prop_assert_eq!(chained, Value::from(items[outer][inner]));
    }

    #[test]
    fn prop_negative_index_counts_from_end(
        items in prop::collection::vec(any::<i64>(), 1..20),
        back in any::<prop::sample::Index>(),
    ) {
        let back = back.index(items.len()) + 1;
        let index = -i64::try_from(back).unwrap();

        let found = X.at(index).apply(Value::list(items.clone())).unwrap();

        prop_assert_eq!(found, Value::from(items[items.len() - back]));
    }

    #[test]
    fn prop_stream_index_matches_list_index(
        items in prop::collection::vec(any::<i64>(), 0..20),
        index in 0_usize..25,
    ) {
        let from_list = X.at(index).apply(Value::list(items.clone()));
        let from_stream = X.at(index).apply(Stream::new(items));

        prop_assert_eq!(from_list, from_stream);
    }

    #[test]
    fn prop_stream_slice_matches_list_slice(
        items in prop::collection::vec(any::<i64>(), 0..20),
        start in prop::option::of(0_i64..25),
        stop in prop::option::of(0_i64..25),
        step in prop::option::of(1_i64..5),
    ) {
        let getter = X.at(Slice::new(start, stop, step));

        let from_list = getter.apply(Value::list(items.clone())).unwrap();
        let from_stream = getter.apply(Stream::new(items)).unwrap();

        prop_assert_eq!(from_list, Value::list(as_list(from_stream)));
    }

    #[test]
    fn prop_subscripting_never_changes_receiver(
        keys in prop::collection::vec(any::<i64>(), 0..10),
        extra in any::<i64>(),
    ) {
        let getter = keys.iter().fold(ItemGetter::new(), |getter, key| getter.at(*key));
        let snapshot = getter.clone();

        let extended = getter.at(extra);

        prop_assert_eq!(&getter, &snapshot);
        prop_assert_eq!(extended.depth(), getter.depth() + 1);
        prop_assert_eq!(&extended.subscripts()[..getter.depth()], getter.subscripts());
    }

    #[test]
    fn prop_full_slice_copies_string(text in "[a-zA-Z0-9 ]{0,16}") {
        let copied = X.at(..).apply(text.as_str()).unwrap();

        prop_assert_eq!(copied, Value::from(text));
    }
}
