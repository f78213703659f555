//! COLON and PIPE format reference
//!
//! This module documents both text formats as implemented by this library. It
//! contains no code.
//!
//! # Value Model
//!
//! Both formats encode the same tree: [`Value`](crate::Value) is one of null, bool,
//! int (arbitrary precision), float, string, list or map. Maps keep insertion order;
//! a repeated key keeps its first position and takes the last value.
//!
//! # Scalar Coercion
//!
//! Neither format quotes strings. Every scalar token is trimmed and typed by
//! [`coerce`](crate::coerce()), first match wins:
//!
//! | Text | Value |
//! |------|-------|
//! | empty | String `""` |
//! | `null` (any case) | Null |
//! | `true`, `false` (any case) | Bool |
//! | optional `-`, then digits only | Int |
//! | optional `-`, digits, `.`, digits | Float |
//! | anything else | String |
//!
//! `+5`, `1e3`, `.5` and `5.` are therefore strings. A string whose text looks
//! like another type (`"30"`, `"True"`) reads back as that type.
//!
//! # COLON
//!
//! ```text
//! document  := object | list | implicit
//! implicit  := entries                       (top level only, no braces)
//! object    := '{' entries '}'
//! entries   := [ entry { ';' entry } ] [ ';' ]
//! entry     := key ':' value
//! list      := '[' [ value { ',' value } ] ']'
//! value     := object | list | scalar
//! ```
//!
//! Whitespace around tokens is ignored. A scalar in an object runs until `;`, `}`
//! or `]`; a list element until `,` or `]`; a key until `:`. A key may not hold an
//! unescaped `; { } [ ]` or `,`, which also makes an empty entry (`a:1;;b:2`,
//! `;a:1`) an error.
//!
//! ## Escapes
//!
//! A backslash makes the next character literal: `a\;b` is the string `a;b`.
//! A token that contained an escape is always a string, so `\30` is the string
//! `30`. A backslash at the very end of the input is kept as is. The serializer
//! escapes `; : { } [ ] ,` and `\` in every string and key.
//!
//! ## Serializer Output
//!
//! ```text
//! {name:John Doe;tags:[dev,python];address:{city:Delhi;zip:110001}}
//! ```
//!
//! Maps always get braces, even at the top level. Floats always carry a `.`
//! (`3.0`); non-finite floats are written `NaN`, `inf`, `-inf`, which read back as
//! strings.
//!
//! ## Strictness
//!
//! By default unterminated structures, a key without `:`, a reserved character
//! in a key, stray characters after a value and trailing input after a top-level
//! structure are errors. With
//! [`CodecOptions::lenient`](crate::CodecOptions::lenient) each of these is
//! logged and recovered from: open structures are closed at end of input, stray
//! text is skipped and reserved characters stay part of the key.
//!
//! # PIPE
//!
//! One entry per line; nesting by indentation, `indent` spaces per level
//! (default 4). Blank lines are ignored and the level of a line is its leading
//! space count divided by the width, rounded down.
//!
//! | Line | Meaning |
//! |------|---------|
//! | `key\|value` | map entry with a scalar value |
//! | `key\|` | map entry whose value is the block indented under it |
//! | `key` | map entry with the empty string |
//! | `- value` | list element |
//! | `-` | list element whose value is the block indented under it |
//!
//! ```text
//! name|John Doe
//! tags|
//!     - dev
//!     - python
//! address|
//!     city|Delhi
//!     zip|110001
//! ```
//!
//! A block is a list if its first line is a list element and a map otherwise;
//! mixing the two in one block is an error. A `key|` with nothing under it is an
//! empty map, a `-` with nothing under it is the empty string. A `- ` right
//! after `|` is dropped, so `key|- 5` is `key|5`.
//!
//! A line indented deeper than its block allows is an error; in lenient mode it
//! is logged and skipped. Indentation is spaces only: a tab in it is an error,
//! and in lenient mode it is logged and the line is read at the level of its
//! spaces.
//!
//! ## Limits of the Text Forms
//!
//! Some trees do not survive a trip through text unchanged:
//!
//! - in PIPE an empty list is written as `key|` and reads back as an empty map
//! - a bare scalar document is not a valid COLON document, and in PIPE it reads
//!   back as a map with that key
//! - a trailing empty-string list element in COLON (`[a,]`) is dropped on read
//! - strings with leading or trailing whitespace lose it
//! - PIPE writes strings raw, so a string containing a newline or starting with
//!   `- ` does not read back
//! - non-finite floats read back as strings
//! - in PIPE a map entry with an empty key and an empty-string value is written
//!   as a blank line, so it disappears on read
//! - in PIPE an empty map or list as a list element is written as a bare `-`
//!   and reads back as the empty string, so `[{}, 1]` becomes `["", 1]`
//!
//! # Depth
//!
//! Both parsers stop at [`CodecOptions::max_depth`](crate::CodecOptions) levels of
//! nesting (default 128) with
//! [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded). The
//! top-level structure counts as depth 1.
//!
//! The serializers do not check depth; like dropping, cloning or comparing a
//! [`Value`](crate::Value), they recurse once per level. Trees from either parser
//! are within the limit, but a tree built in code tens of thousands of levels
//! deep exhausts the thread's stack. Keep hand-built trees within `max_depth` if
//! they are meant to be read back. The validator recurses along the schema, so
//! it only goes as deep as the schema itself is nested.
