//! The COLON format: compact inline notation.
//!
//! ```text
//! name:John Doe;age:30;tags:[dev,python];address:{city:Delhi;zip:110001}
//! ```
//!
//! See [`crate::grammar`] for the full grammar.

mod parser;
mod writer;

pub use parser::{parse_colon, parse_colon_with_options};
pub use writer::serialize_colon;

pub(crate) use writer::format_float;
