use colonpipe::{
    convert, convert_tags, from_colon_str, from_pipe_str, parse_colon, parse_pipe,
    serialize_colon, serialize_pipe, to_colon_string, to_pipe_string, to_value, validate_schema,
    CodecOptions, Converted, Error, Format, Schema, Value, ValueMap,
};
use serde::{Deserialize, Serialize};

const PROFILE: &str =
    "name:John Doe;age:30;tags:[dev,python];address:{city:Delhi;zip:110001};active:true";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Address {
    city: String,
    zip: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Profile {
    name: String,
    age: u32,
    tags: Vec<String>,
    address: Address,
    active: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    items: Vec<Product>,
    note: Option<String>,
}

fn profile_schema() -> Schema {
    Schema::object([
        ("name", Schema::string()),
        ("age", Schema::int()),
        ("tags", Schema::list_of(Schema::string())),
        (
            "address",
            Schema::object([("city", Schema::string()), ("zip", Schema::int())]),
        ),
        ("active", Schema::bool()),
    ])
}

fn expected_profile() -> Value {
    let mut address = ValueMap::new();
    address.insert("city".to_string(), Value::from("Delhi"));
    address.insert("zip".to_string(), Value::from(110001));

    let mut map = ValueMap::new();
    map.insert("name".to_string(), Value::from("John Doe"));
    map.insert("age".to_string(), Value::from(30));
    map.insert(
        "tags".to_string(),
        Value::List(vec![Value::from("dev"), Value::from("python")]),
    );
    map.insert("address".to_string(), Value::Map(address));
    map.insert("active".to_string(), Value::from(true));
    Value::Map(map)
}

#[test]
fn test_profile_parses_to_documented_map() {
    let value = parse_colon(PROFILE).unwrap();
    assert_eq!(value, expected_profile());
}

#[test]
fn test_profile_validates_cleanly() {
    let value = parse_colon(PROFILE).unwrap();
    assert!(validate_schema(&value, &profile_schema()).is_empty());
}

#[test]
fn test_profile_colon_pipe_colon() {
    let pipe = convert(PROFILE, Format::Colon, Format::Pipe)
        .unwrap()
        .into_text()
        .unwrap();
    println!("PIPE:\n{}", pipe);

    let colon = convert(&pipe, Format::Pipe, Format::Colon)
        .unwrap()
        .into_text()
        .unwrap();
    assert_eq!(parse_colon(&colon).unwrap(), expected_profile());
}

#[test]
fn test_missing_key_is_reported() {
    let mut map = ValueMap::new();
    map.insert("name".to_string(), Value::from("x"));
    let schema = Schema::object([("name", Schema::string()), ("age", Schema::int())]);
    assert_eq!(
        validate_schema(&Value::Map(map), &schema),
        vec!["/age: missing"]
    );
}

#[test]
fn test_convert_to_object() {
    let converted = convert_tags(PROFILE, "COLON", "OBJ").unwrap();
    assert_eq!(converted, Converted::Value(expected_profile()));
}

#[test]
fn test_unknown_format_tag() {
    let err = convert_tags(PROFILE, "COLON", "JSON").unwrap_err();
    assert_eq!(err, Error::UnsupportedFormat("JSON".to_string()));
}

#[test]
fn test_profile_struct_from_both_formats() {
    let from_colon: Profile = from_colon_str(PROFILE).unwrap();
    assert_eq!(from_colon.address.city, "Delhi");
    assert_eq!(from_colon.tags, vec!["dev", "python"]);

    let pipe = serialize_pipe(&parse_colon(PROFILE).unwrap());
    let from_pipe: Profile = from_pipe_str(&pipe).unwrap();
    assert_eq!(from_pipe, from_colon);
}

#[test]
fn test_nested_struct_list() {
    let order = Order {
        order_id: 42,
        items: vec![
            Product {
                sku: "A-1".to_string(),
                price: 9.99,
                quantity: 2,
            },
            Product {
                sku: "B-2".to_string(),
                price: 15.0,
                quantity: 1,
            },
        ],
        note: None,
    };

    let colon = to_colon_string(&order).unwrap();
    assert_eq!(
        colon,
        "{order_id:42;items:[{sku:A-1;price:9.99;quantity:2},{sku:B-2;price:15.0;quantity:1}];note:null}"
    );
    let back: Order = from_colon_str(&colon).unwrap();
    assert_eq!(back, order);

    let pipe = to_pipe_string(&order).unwrap();
    assert_eq!(
        pipe,
        "order_id|42\nitems|\n    -\n        sku|A-1\n        price|9.99\n        quantity|2\n    -\n        sku|B-2\n        price|15.0\n        quantity|1\nnote|null"
    );
    let back: Order = from_pipe_str(&pipe).unwrap();
    assert_eq!(back, order);
}

#[test]
fn test_reserved_characters_in_struct_fields() {
    let product = Product {
        sku: "x;y:{z},[w]".to_string(),
        price: 1.5,
        quantity: 3,
    };
    let colon = to_colon_string(&product).unwrap();
    let back: Product = from_colon_str(&colon).unwrap();
    assert_eq!(back, product);
}

#[test]
fn test_value_serde_json_interop() {
    let value = parse_colon(PROFILE).unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(
        json,
        r#"{"name":"John Doe","age":30,"tags":["dev","python"],"address":{"city":"Delhi","zip":110001},"active":true}"#
    );
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_to_value_matches_parsed_text() {
    let profile: Profile = from_colon_str(PROFILE).unwrap();
    assert_eq!(to_value(&profile).unwrap(), expected_profile());
    assert_eq!(serialize_colon(&expected_profile()), format!("{{{}}}", PROFILE));
}

#[test]
fn test_error_positions() {
    let err = parse_colon("a:1;\nb:[1,2").unwrap_err();
    assert_eq!(err.position().map(|(line, _)| line), Some(2));

    let err = parse_pipe("a|1\nb|\n    - x\n    y|2").unwrap_err();
    assert_eq!(err.position(), Some((4, 5)));
}

fn nested_maps(depth: usize) -> Value {
    let mut value = Value::from(1);
    for _ in 0..depth {
        let mut map = ValueMap::new();
        map.insert("k".to_string(), value);
        value = Value::Map(map);
    }
    value
}

#[test]
fn test_tree_at_depth_limit_round_trips() {
    let limit = CodecOptions::default().max_depth;
    let value = nested_maps(limit);

    assert_eq!(parse_colon(&serialize_colon(&value)).unwrap(), value);
    assert_eq!(parse_pipe(&serialize_pipe(&value)).unwrap(), value);

    let deeper = nested_maps(limit + 1);
    assert!(matches!(
        parse_colon(&serialize_colon(&deeper)),
        Err(Error::RecursionLimitExceeded { .. })
    ));
    assert!(matches!(
        parse_pipe(&serialize_pipe(&deeper)),
        Err(Error::RecursionLimitExceeded { .. })
    ));
}

#[test]
fn test_validation_depth_follows_schema() {
    let value = nested_maps(1_000);
    let schema = Schema::object([(
        "k",
        Schema::object([("k", Schema::predicate(|v: &Value| v.is_map()))]),
    )]);
    assert!(validate_schema(&value, &schema).is_empty());

    let schema = Schema::object([("k", Schema::object([("k", Schema::int())]))]);
    assert_eq!(validate_schema(&value, &schema), vec!["/k/k: expected int"]);
}
