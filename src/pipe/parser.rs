//! Indentation-block parser for PIPE text.

use crate::coerce::coerce;
use crate::{CodecOptions, Error, Result, Value, ValueMap};

/// Parses PIPE text with default (strict) options.
///
/// # Examples
///
/// ```rust
/// use colonpipe::{parse_pipe, Value};
///
/// let text = "name|John Doe\ntags|\n    - dev\n    - python\naddress|\n    city|Delhi";
/// let value = parse_pipe(text).unwrap();
///
/// assert_eq!(value.get("name"), Some(&Value::from("John Doe")));
/// assert_eq!(value.get("tags").and_then(|t| t.as_list()).map(Vec::len), Some(2));
/// assert_eq!(
///     value.get("address").and_then(|a| a.get("city")),
///     Some(&Value::from("Delhi"))
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] for a block that mixes list items with keys or
/// for a line indented deeper than its block allows, and
/// [`Error::RecursionLimitExceeded`] for blocks nested too deeply.
pub fn parse_pipe(text: &str) -> Result<Value> {
    parse_pipe_with_options(text, &CodecOptions::default())
}

/// Parses PIPE text.
///
/// In lenient mode lines indented too deeply are skipped one by one instead of
/// failing; mixed blocks are rejected in both modes.
///
/// # Errors
///
/// See [`parse_pipe`].
pub fn parse_pipe_with_options(text: &str, options: &CodecOptions) -> Result<Value> {
    log::debug!("parsing PIPE document ({} bytes)", text.len());
    let mut lines = Lines::new(text, options)?;
    lines.parse_block(0)
}

#[derive(Clone, Copy)]
struct Line<'a> {
    number: usize,
    spaces: usize,
    level: usize,
    content: &'a str,
    raw: &'a str,
}

enum LineKind<'a> {
    /// `- value`
    Item(&'a str),
    /// `-` on its own, followed by a nested block
    Marker,
    /// `key|` followed by a nested block
    Nested(&'a str),
    /// `key|value`
    Pair(&'a str, &'a str),
    /// `key`
    Bare(&'a str),
}

impl<'a> LineKind<'a> {
    fn of(content: &'a str) -> Self {
        if content == "-" {
            return LineKind::Marker;
        }
        if let Some(rest) = content.strip_prefix("- ") {
            return LineKind::Item(rest);
        }
        match content.split_once('|') {
            Some((key, value)) if value.trim().is_empty() => LineKind::Nested(key.trim()),
            Some((key, value)) => LineKind::Pair(key.trim(), value.trim()),
            None => LineKind::Bare(content.trim()),
        }
    }

    fn is_list_item(&self) -> bool {
        matches!(self, LineKind::Item(_) | LineKind::Marker)
    }
}

/// The non-blank lines of one document and the index of the next unread line.
struct Lines<'a> {
    lines: Vec<Line<'a>>,
    index: usize,
    options: &'a CodecOptions,
}

impl<'a> Lines<'a> {
    /// Splits `text` into lines. Indentation is spaces only; a tab in it is an
    /// error in strict mode and plain content otherwise.
    fn new(text: &'a str, options: &'a CodecOptions) -> Result<Self> {
        let width = options.indent.max(1);
        let mut lines = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            let trimmed = raw.trim_end();
            let spaces = trimmed.len() - trimmed.trim_start_matches(' ').len();
            let content = &trimmed[spaces..];
            if content.starts_with('\t') {
                if !options.lenient {
                    return Err(Error::malformed(
                        i + 1,
                        spaces + 1,
                        "tab in indentation",
                        raw,
                    ));
                }
                log::warn!("tab in indentation at line {}; counting spaces only", i + 1);
            }
            lines.push(Line {
                number: i + 1,
                spaces,
                level: spaces / width,
                content: content.trim_start(),
                raw,
            });
        }
        Ok(Lines {
            lines,
            index: 0,
            options,
        })
    }

    /// The next line at exactly `level`, without consuming it.
    ///
    /// Returns `None` at end of input or on a line of lesser level. Deeper lines
    /// are an error, or skipped in lenient mode.
    fn peek_at(&mut self, level: usize) -> Result<Option<Line<'a>>> {
        while let Some(line) = self.lines.get(self.index).copied() {
            if line.level < level {
                return Ok(None);
            }
            if line.level == level {
                return Ok(Some(line));
            }
            if !self.options.lenient {
                return Err(Error::malformed(
                    line.number,
                    line.spaces + 1,
                    &format!(
                        "unexpected indentation: expected level {}, found level {}",
                        level, line.level
                    ),
                    line.raw,
                ));
            }
            log::warn!(
                "skipping over-indented PIPE line {} (level {}, expected {})",
                line.number,
                line.level,
                level
            );
            self.index += 1;
        }
        Ok(None)
    }

    fn next_at(&mut self, level: usize) -> Result<Option<Line<'a>>> {
        let line = self.peek_at(level)?;
        if line.is_some() {
            self.index += 1;
        }
        Ok(line)
    }

    /// The block one level below `level`, if any lines are indented under it.
    fn parse_child(&mut self, level: usize) -> Result<Option<Value>> {
        match self.lines.get(self.index) {
            Some(next) if next.level > level => self.parse_block(level + 1).map(Some),
            _ => Ok(None),
        }
    }

    /// Parses the block at `level`, typed by its first line.
    fn parse_block(&mut self, level: usize) -> Result<Value> {
        if level >= self.options.max_depth {
            let (line, col) = self
                .lines
                .get(self.index)
                .map_or((0, 0), |l| (l.number, l.spaces + 1));
            return Err(Error::recursion_limit(self.options.max_depth, line, col));
        }

        let first = match self.peek_at(level)? {
            Some(line) => line,
            None => return Ok(Value::Map(ValueMap::new())),
        };
        log::trace!("block at level {} starting on line {}", level, first.number);

        if LineKind::of(first.content).is_list_item() {
            self.parse_list_block(level)
        } else {
            self.parse_map_block(level)
        }
    }

    fn parse_list_block(&mut self, level: usize) -> Result<Value> {
        let mut items = Vec::new();
        while let Some(line) = self.next_at(level)? {
            match LineKind::of(line.content) {
                LineKind::Item(text) => items.push(coerce(text)),
                LineKind::Marker => {
                    let child = self.parse_child(level)?;
                    items.push(child.unwrap_or_else(|| Value::String(String::new())));
                }
                LineKind::Nested(_) | LineKind::Pair(..) | LineKind::Bare(_) => {
                    return Err(mixed_block(line, "key line in a list block"));
                }
            }
        }
        Ok(Value::List(items))
    }

    fn parse_map_block(&mut self, level: usize) -> Result<Value> {
        let mut map = ValueMap::new();
        while let Some(line) = self.next_at(level)? {
            match LineKind::of(line.content) {
                LineKind::Nested(key) => {
                    let child = self.parse_child(level)?;
                    map.insert(
                        key.to_string(),
                        child.unwrap_or_else(|| Value::Map(ValueMap::new())),
                    );
                }
                LineKind::Pair(key, value) => {
                    let value = value.strip_prefix("- ").unwrap_or(value);
                    map.insert(key.to_string(), coerce(value));
                }
                LineKind::Bare(key) => {
                    map.insert(key.to_string(), Value::String(String::new()));
                }
                LineKind::Item(_) | LineKind::Marker => {
                    return Err(mixed_block(line, "list item in a map block"));
                }
            }
        }
        Ok(Value::Map(map))
    }
}

fn mixed_block(line: Line<'_>, msg: &str) -> Error {
    Error::malformed(line.number, line.spaces + 1, msg, line.raw)
}
