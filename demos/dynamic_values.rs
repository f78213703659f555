//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use colonpipe::{serialize_colon, serialize_pipe, to_value, value, Value};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = value!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config as PIPE:\n{}\n", serialize_pipe(&config));
    println!("Config as COLON:\n{}\n", serialize_colon(&config));

    if let Some(host) = config.get("host").and_then(Value::as_str) {
        println!("Accessing field 'host': {}", host);
    }
    if let Some(port) = config.get("port").and_then(Value::as_i64) {
        println!("Accessing field 'port': {}", port);
    }
    if let Some(features) = config.get("features").and_then(Value::as_list) {
        println!("Accessing field 'features': {} items\n", features.len());
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as PIPE:\n{}\n", serialize_pipe(&user_value));

    println!("Type checks:");
    println!("  is_map:    {}", user_value.is_map());
    println!("  is_list:   {}", user_value.is_list());
    println!("  type_name: {}", user_value.type_name());

    Ok(())
}
