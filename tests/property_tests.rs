//! Property-based tests for the round-trip guarantees of both formats.
//!
//! Generated strings avoid the text forms that coercion would retype (`null`,
//! `true`, `false`, numbers) and surrounding whitespace, which neither format
//! preserves. PIPE trees additionally avoid empty lists and maps.

use colonpipe::{
    convert, from_colon_str, from_pipe_str, parse_colon, parse_pipe, serialize_colon,
    serialize_pipe, to_colon_string, to_pipe_string, Format, Value, ValueMap,
};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

fn is_keyword(s: &str) -> bool {
    ["null", "true", "false"]
        .iter()
        .any(|k| s.eq_ignore_ascii_case(k))
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z_]{0,8}".prop_filter("keyword", |s| !is_keyword(s))
}

/// Words that may contain COLON's reserved characters and backslashes.
fn colon_text() -> impl Strategy<Value = String> {
    "[a-z;:,{}\\[\\]\\\\]{1,10}".prop_filter("keyword", |s| !is_keyword(s))
}

fn scalar(text: BoxedStrategy<String>) -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        prop::num::f64::NORMAL.prop_map(Value::from),
        text.prop_map(Value::from),
    ]
}

fn map_of(entries: Vec<(String, Value)>) -> Value {
    Value::Map(entries.into_iter().collect::<ValueMap>())
}

fn colon_tree() -> impl Strategy<Value = Value> {
    let leaf = scalar(colon_text().boxed());
    let tree = leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::List),
            prop::collection::vec((colon_text(), inner), 0..5).prop_map(map_of),
        ]
    })
    .boxed();
    prop_oneof![
        prop::collection::vec(tree.clone(), 0..5).prop_map(Value::List),
        prop::collection::vec((colon_text(), tree), 0..5).prop_map(map_of),
    ]
}

fn pipe_tree() -> impl Strategy<Value = Value> {
    let leaf = scalar(word().boxed());
    let tree = leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..5).prop_map(Value::List),
            prop::collection::vec((word(), inner), 1..5).prop_map(map_of),
        ]
    })
    .boxed();
    prop_oneof![
        prop::collection::vec(tree.clone(), 1..5).prop_map(Value::List),
        prop::collection::vec((word(), tree), 1..5).prop_map(map_of),
    ]
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Record {
    id: u32,
    name: String,
    score: Option<i64>,
    tags: Vec<String>,
    pair: (i32, bool),
}

fn record() -> impl Strategy<Value = Record> {
    (
        any::<u32>(),
        word(),
        proptest::option::of(any::<i64>()),
        prop::collection::vec(word(), 0..4),
        (any::<i32>(), any::<bool>()),
    )
        .prop_map(|(id, name, score, tags, pair)| Record {
            id,
            name,
            score,
            tags,
            pair,
        })
}

proptest! {
    #[test]
    fn prop_colon_round_trip(value in colon_tree()) {
        let text = serialize_colon(&value);
        prop_assert_eq!(parse_colon(&text).unwrap(), value, "text: {}", text);
    }

    #[test]
    fn prop_pipe_round_trip(value in pipe_tree()) {
        let text = serialize_pipe(&value);
        prop_assert_eq!(parse_pipe(&text).unwrap(), value, "text:\n{}", text);
    }

    #[test]
    fn prop_colon_pipe_colon(value in pipe_tree()) {
        let colon = serialize_colon(&value);
        let pipe = convert(&colon, Format::Colon, Format::Pipe).unwrap().into_text().unwrap();
        let back = convert(&pipe, Format::Pipe, Format::Colon).unwrap().into_text().unwrap();
        prop_assert_eq!(parse_colon(&back).unwrap(), parse_colon(&colon).unwrap());
    }

    #[test]
    fn prop_integers_coerce_exactly(n in any::<i128>()) {
        let value = parse_colon(&format!("n:{}", n)).unwrap();
        prop_assert_eq!(value.get("n"), Some(&Value::from(n)));
    }

    #[test]
    fn prop_record_through_colon(r in record()) {
        let text = to_colon_string(&r).unwrap();
        prop_assert_eq!(from_colon_str::<Record>(&text).unwrap(), r);
    }

    #[test]
    fn prop_record_through_pipe(r in record()) {
        let text = to_pipe_string(&r).unwrap();
        prop_assert_eq!(from_pipe_str::<Record>(&text).unwrap(), r);
    }

    #[test]
    fn prop_parsers_never_panic(text in "[a-z0-9 :;,{}\\[\\]|\\-\n\\\\]{0,40}") {
        let _ = parse_colon(&text);
        let _ = parse_pipe(&text);
    }
}
