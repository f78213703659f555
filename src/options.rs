//! Configuration options for parsing and serialization.
//!
//! [`CodecOptions`] controls the PIPE indentation width, the maximum nesting depth
//! accepted by both parsers, and whether the parsers recover from malformed input
//! (lenient mode) or reject it.
//!
//! ## Examples
//!
//! ```rust
//! use colonpipe::{parse_colon_with_options, CodecOptions};
//!
//! // Strict parsing rejects an unterminated list...
//! assert!(parse_colon_with_options("tags:[a,b", &CodecOptions::new()).is_err());
//!
//! // ...lenient parsing closes it at end of input.
//! let value = parse_colon_with_options("tags:[a,b", &CodecOptions::lenient()).unwrap();
//! assert_eq!(value.get("tags").and_then(|v| v.as_list()).map(Vec::len), Some(2));
//! ```

/// Spaces per PIPE indentation level.
pub const DEFAULT_INDENT: usize = 4;

/// Default nesting limit for both parsers.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options shared by the COLON and PIPE codecs.
///
/// # Examples
///
/// ```rust
/// use colonpipe::CodecOptions;
///
/// let options = CodecOptions::new();
/// assert_eq!(options.indent, 4);
/// assert_eq!(options.max_depth, 128);
/// assert!(!options.lenient);
///
/// let options = CodecOptions::lenient().with_indent(2).with_max_depth(16);
/// assert!(options.lenient);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    /// Spaces per PIPE indentation level (parser and writer).
    pub indent: usize,
    /// Deepest structure either parser accepts.
    pub max_depth: usize,
    /// Recover from malformed input instead of failing.
    pub lenient: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            indent: DEFAULT_INDENT,
            max_depth: DEFAULT_MAX_DEPTH,
            lenient: false,
        }
    }
}

impl CodecOptions {
    /// Creates default options: strict parsing, 4-space PIPE indentation, depth 128.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for best-effort parsing.
    ///
    /// Unterminated COLON structures end silently at end of input and PIPE lines
    /// indented too deeply are skipped. Each recovery is logged at `warn` level.
    #[must_use]
    pub fn lenient() -> Self {
        CodecOptions {
            lenient: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per PIPE indentation level.
    ///
    /// A width of zero is treated as one.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Turns lenient parsing on or off.
    #[must_use]
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}
