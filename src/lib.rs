//! # colonpipe
//!
//! Two plain-text encodings for nested data and a schema validator for the trees
//! they describe.
//!
//! - **COLON**: compact and inline, `name:John Doe;tags:[dev,python]`
//! - **PIPE**: one entry per line, nested by indentation
//!
//! Both formats parse into the same dynamically typed [`Value`], can be converted
//! into one another with [`convert`], and are checked against a declarative
//! [`Schema`] with [`validate_schema`]. Neither format quotes strings: scalar text
//! is typed by [`coerce()`].
//!
//! ## Quick Start
//!
//! ```rust
//! use colonpipe::{parse_colon, serialize_pipe, validate_schema, Schema, Value};
//!
//! let text = "name:John Doe;age:30;tags:[dev,python];address:{city:Delhi;zip:110001};active:true";
//! let value = parse_colon(text).unwrap();
//!
//! assert_eq!(value.get("age"), Some(&Value::from(30)));
//! assert_eq!(
//!     serialize_pipe(&value),
//!     "name|John Doe\nage|30\ntags|\n    - dev\n    - python\naddress|\n    city|Delhi\n    zip|110001\nactive|true"
//! );
//!
//! let schema = Schema::object([
//!     ("name", Schema::string()),
//!     ("age", Schema::int()),
//!     ("tags", Schema::list_of(Schema::string())),
//!     ("address", Schema::object([("city", Schema::string()), ("zip", Schema::int())])),
//!     ("active", Schema::bool()),
//! ]);
//! assert!(validate_schema(&value, &schema).is_empty());
//! ```
//!
//! ## Converting Between Formats
//!
//! ```rust
//! use colonpipe::{convert_tags, Converted};
//!
//! let colon = convert_tags("a|1\nb|\n    - x\n    - y", "PIPE", "COLON").unwrap();
//! assert_eq!(colon, Converted::Text("{a:1;b:[x,y]}".to_string()));
//! ```
//!
//! ## Serde Integration
//!
//! Any `Serialize`/`Deserialize` type can be written to and read from either format
//! through the [`Value`] tree:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use colonpipe::{from_pipe_str, to_colon_string, to_pipe_string};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     roles: Vec<String>,
//! }
//!
//! let user = User { id: 7, name: "Ada".into(), roles: vec!["admin".into()] };
//! assert_eq!(to_colon_string(&user).unwrap(), "{id:7;name:Ada;roles:[admin]}");
//!
//! let pipe = to_pipe_string(&user).unwrap();
//! let back: User = from_pipe_str(&pipe).unwrap();
//! assert_eq!(back, user);
//! ```
//!
//! ## Strict and Lenient Parsing
//!
//! The plain functions are strict: malformed input is an [`Error`] with a line and
//! column. The `_with_options` variants take [`CodecOptions`], whose lenient mode
//! recovers from what it can and reports each recovery through the `log` crate.
//!
//! ```rust
//! use colonpipe::{parse_colon, parse_colon_with_options, CodecOptions, Value};
//!
//! assert!(parse_colon("tags:[dev,python").is_err());
//!
//! let value = parse_colon_with_options("tags:[dev,python", &CodecOptions::lenient()).unwrap();
//! assert_eq!(value.get("tags").and_then(|t| t.as_list()).map(Vec::len), Some(2));
//! ```
//!
//! ## Logging
//!
//! The crate emits through the [`log`](https://docs.rs/log) facade and installs no
//! logger: `debug` for each parse and conversion, `trace` per structure, `warn` for
//! every lenient recovery.
//!
//! See [`grammar`] for the precise rules of both formats.

pub mod coerce;
pub mod colon;
pub mod convert;
mod cursor;
pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod pipe;
pub mod schema;
pub mod ser;
pub mod value;

pub use coerce::coerce;
pub use colon::{parse_colon, parse_colon_with_options, serialize_colon};
pub use convert::{convert, convert_tags, convert_with_options, Converted, Format};
pub use de::{from_value, ValueDeserializer};
pub use error::{Error, Result};
pub use map::ValueMap;
pub use options::CodecOptions;
pub use pipe::{
    parse_pipe, parse_pipe_with_options, pipe_lines, serialize_pipe, serialize_pipe_with_options,
};
pub use schema::{validate, validate_schema, Predicate, Schema, TypeTag, Violation};
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes any `T: Serialize` to COLON text.
///
/// # Examples
///
/// ```rust
/// use colonpipe::to_colon_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_colon_string(&Point { x: 1, y: 2 }).unwrap(), "{x:1;y:2}");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for values with no [`Value`] form, such as
/// enum variants carrying data.
pub fn to_colon_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(serialize_colon(&to_value(value)?))
}

/// Serializes any `T: Serialize` to PIPE text.
///
/// # Errors
///
/// See [`to_colon_string`].
pub fn to_pipe_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(serialize_pipe(&to_value(value)?))
}

/// Deserializes a `T` from COLON text.
///
/// # Examples
///
/// ```rust
/// use colonpipe::from_colon_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_colon_str("x:1;y:2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a parse error with line and column, or [`Error::Custom`] when the
/// parsed value does not fit `T`.
pub fn from_colon_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse_colon(text)?)
}

/// Deserializes a `T` from PIPE text.
///
/// # Errors
///
/// See [`from_colon_str`].
pub fn from_pipe_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse_pipe(text)?)
}
