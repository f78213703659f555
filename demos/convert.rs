//! Converting a document between COLON and PIPE.
//!
//! Run with: cargo run --example convert

use colonpipe::{convert, convert_tags, parse_colon_with_options, CodecOptions, Format};
use std::error::Error;

const PROFILE: &str =
    "name:John Doe;age:30;tags:[dev,python];address:{city:Delhi;zip:110001};active:true";

fn main() -> Result<(), Box<dyn Error>> {
    println!("COLON input:\n{}\n", PROFILE);

    let pipe = convert(PROFILE, Format::Colon, Format::Pipe)?
        .into_text()
        .unwrap_or_default();
    println!("As PIPE:\n{}\n", pipe);

    let back = convert(&pipe, Format::Pipe, Format::Colon)?
        .into_text()
        .unwrap_or_default();
    println!("Back to COLON:\n{}\n", back);

    // Format tags are case-insensitive; "object" yields the parsed value.
    let object = convert_tags(PROFILE, "colon", "OBJECT")?;
    if let Some(value) = object.into_value() {
        println!("Parsed object has {} fields", value.as_map().map_or(0, |m| m.len()));
    }

    match convert_tags(PROFILE, "colon", "yaml") {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Unknown tag: {}\n", err),
    }

    // Lenient parsing closes what a truncated document left open.
    let truncated = "name:John;tags:[dev,python";
    let lenient = parse_colon_with_options(truncated, &CodecOptions::lenient())?;
    println!("Lenient read of {:?}: {}", truncated, lenient);

    Ok(())
}
