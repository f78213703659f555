//! Validating parsed documents against a schema.
//!
//! Run with: cargo run --example schema

use colonpipe::{parse_colon, parse_pipe, validate_schema, Schema, Value};
use std::error::Error;

fn profile_schema() -> Schema {
    Schema::object([
        ("name", Schema::string()),
        ("age", Schema::int()),
        ("tags", Schema::list_of(Schema::string())),
        (
            "address",
            Schema::object([
                ("city", Schema::string()),
                (
                    "zip",
                    Schema::predicate(|value: &Value| {
                        value.as_i64().map_or(false, |zip| (100000..1000000).contains(&zip))
                    }),
                ),
            ]),
        ),
        ("active", Schema::bool()),
    ])
}

fn report(label: &str, violations: &[String]) {
    if violations.is_empty() {
        println!("{}: valid", label);
    } else {
        println!("{}:", label);
        for violation in violations {
            println!("  {}", violation);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let schema = profile_schema();

    let good = parse_colon(
        "name:John Doe;age:30;tags:[dev,python];address:{city:Delhi;zip:110001};active:true",
    )?;
    report("good profile", &validate_schema(&good, &schema));

    let bad = parse_pipe(
        "name|John Doe\ntags|\n    - dev\n    - 7\naddress|\n    city|Delhi\n    zip|12\nactive|yes",
    )?;
    report("bad profile", &validate_schema(&bad, &schema));

    Ok(())
}
