//! The PIPE format: one entry per line, nesting by indentation.
//!
//! ```text
//! name|John Doe
//! tags|
//!     - dev
//!     - python
//! address|
//!     city|Delhi
//! ```
//!
//! See [`crate::grammar`] for the full grammar.

mod parser;
mod writer;

pub use parser::{parse_pipe, parse_pipe_with_options};
pub use writer::{pipe_lines, serialize_pipe, serialize_pipe_with_options};
