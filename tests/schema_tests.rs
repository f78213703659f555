use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use colonpipe::{
    parse_colon, parse_pipe, validate, validate_schema, value, Schema, TypeTag, Violation,
};

fn user_schema() -> Schema {
    Schema::object([
        ("name", Schema::string()),
        ("age", Schema::int()),
        ("score", Schema::float()),
        ("admin", Schema::bool()),
        ("manager", Schema::null()),
        ("tags", Schema::list_of(Schema::string())),
    ])
}

#[test]
fn test_valid_document() {
    let value =
        parse_colon("name:Ann;age:41;score:9.5;admin:false;manager:null;tags:[ops,dev]").unwrap();
    assert!(validate_schema(&value, &user_schema()).is_empty());
}

#[test]
fn test_every_violation_is_collected() {
    let value = parse_colon("name:7;score:9;admin:yes;manager:bob;tags:[ops,3,4.5]").unwrap();
    assert_eq!(
        validate_schema(&value, &user_schema()),
        vec![
            "/name: expected string",
            "/age: missing",
            "/score: expected float",
            "/admin: expected bool",
            "/manager: expected null",
            "/tags[1]: expected string",
            "/tags[2]: expected string",
        ]
    );
}

#[test]
fn test_wrong_container_types() {
    let value = value!({"tags": "ops", "address": ["x"]});
    let schema = Schema::object([
        ("tags", Schema::any_list()),
        ("address", Schema::object([("city", Schema::string())])),
    ]);
    assert_eq!(
        validate_schema(&value, &schema),
        vec!["/tags: expected list", "/address: expected object"]
    );
}

#[test]
fn test_root_paths() {
    assert_eq!(
        validate_schema(&value!(1), &Schema::string()),
        vec!["/: expected string"]
    );
    assert_eq!(
        validate_schema(&value!([1, "x"]), &Schema::list_of(Schema::int())),
        vec!["/[1]: expected int"]
    );
    assert_eq!(
        validate_schema(
            &value!([[1, "x"]]),
            &Schema::list_of(Schema::list_of(Schema::int()))
        ),
        vec!["/[0][1]: expected int"]
    );
}

#[test]
fn test_validates_pipe_documents() {
    let value = parse_pipe("rows|\n    -\n        id|1\n    -\n        id|two").unwrap();
    let schema = Schema::object([(
        "rows",
        Schema::list_of(Schema::object([("id", Schema::int())])),
    )]);
    assert_eq!(
        validate_schema(&value, &schema),
        vec!["/rows[1]/id: expected int"]
    );
}

#[test]
fn test_predicates() {
    let even = Schema::predicate(|v| v.as_i64().map_or(false, |n| n % 2 == 0));
    let schema = Schema::object([("a", even.clone()), ("b", even)]);
    assert_eq!(
        validate_schema(&value!({"a": 2, "b": 3}), &schema),
        vec!["/b: custom validator failed"]
    );
}

#[test]
fn test_faulting_predicate_does_not_stop_validation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let schema = Schema::object([
        (
            "bad",
            Schema::predicate(|v| {
                let n = v.as_i64().expect("an int");
                n > 0
            }),
        ),
        (
            "counted",
            Schema::predicate(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            }),
        ),
        ("typed", Schema::int()),
    ]);
    let value = value!({"bad": "text", "counted": null, "typed": "x"});
    assert_eq!(
        validate_schema(&value, &schema),
        vec!["/bad: custom validator exception", "/typed: expected int"]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fallible_predicate() {
    let schema = Schema::try_predicate(|v| match v.as_str() {
        Some(s) => Ok(s.len() <= 3),
        None => Err(format!("not a string: {}", v)),
    });
    assert!(validate_schema(&value!("abc"), &schema).is_empty());
    assert_eq!(
        validate_schema(&value!("abcd"), &schema),
        vec!["/: custom validator failed"]
    );
    assert_eq!(
        validate_schema(&value!(5), &schema),
        vec!["/: custom validator exception"]
    );
}

#[test]
fn test_structured_violations() {
    let schema = Schema::object([("n", Schema::from(TypeTag::Int))]);
    let violations = validate(&value!({"n": 1.5}), &schema);
    assert_eq!(
        violations,
        vec![Violation {
            path: "/n".to_string(),
            message: "expected int".to_string(),
        }]
    );
    assert_eq!(violations[0].to_string(), "/n: expected int");
}

#[test]
fn test_schema_is_shareable_across_threads() {
    let schema = Arc::new(user_schema());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = Arc::clone(&schema);
            std::thread::spawn(move || {
                let value = parse_colon(&format!(
                    "name:n{};age:{};score:1.0;admin:true;manager:null;tags:[]",
                    i, i
                ))
                .unwrap();
                validate_schema(&value, &schema)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_empty());
    }
}
