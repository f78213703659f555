//! Error types for COLON and PIPE parsing, conversion and the serde bridge.
//!
//! ## Error Categories
//!
//! - **Malformed input**: unterminated structures, missing separators, mixed PIPE
//!   blocks and indentation jumps, with line/column information
//! - **Recursion limit**: input nested deeper than the configured maximum depth
//! - **Unsupported format**: an unknown format tag given to the converter
//! - **Unsupported type**: a Rust value with no [`Value`](crate::Value) equivalent
//!
//! Schema validation never produces an [`Error`]; violations are collected as data
//! (see [`crate::schema`]).
//!
//! ## Examples
//!
//! ```rust
//! use colonpipe::{parse_colon, Error};
//!
//! let result = parse_colon("tags:[dev,python");
//! assert!(matches!(result, Err(Error::MalformedInput { .. })));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("line 1"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input text that does not follow the grammar.
    #[error("Malformed input at line {line}, column {col}: {msg}\n{context}")]
    MalformedInput {
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// Nesting deeper than [`CodecOptions::max_depth`](crate::CodecOptions).
    #[error("Recursion limit of {limit} exceeded at line {line}, column {col}")]
    RecursionLimitExceeded { limit: usize, line: usize, col: usize },

    /// Unknown or unusable format tag.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A Rust value that has no `Value` representation.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error, usually raised through serde.
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed-input error.
    ///
    /// `context` is the source line the error was found on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use colonpipe::Error;
    ///
    /// let err = Error::malformed(3, 7, "expected ':' after key", "name John");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// assert!(err.to_string().contains("name John"));
    /// ```
    pub fn malformed(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::MalformedInput {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates a recursion-limit error.
    pub fn recursion_limit(limit: usize, line: usize, col: usize) -> Self {
        Error::RecursionLimitExceeded { limit, line, col }
    }

    /// Creates an unsupported-format error for an unrecognized tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use colonpipe::Error;
    ///
    /// let err = Error::unsupported_format("XML");
    /// assert_eq!(err.to_string(), "Unsupported format: XML");
    /// ```
    pub fn unsupported_format(tag: &str) -> Self {
        Error::UnsupportedFormat(tag.to_string())
    }

    /// Creates an unsupported-type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the 1-based `(line, column)` of a parse error, if the error has one.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::MalformedInput { line, col, .. }
            | Error::RecursionLimitExceeded { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
