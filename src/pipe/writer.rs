//! PIPE serialization.

use crate::colon::{format_float, serialize_colon};
use crate::{CodecOptions, Value};

/// Renders a value as PIPE text with the default indentation width.
///
/// # Examples
///
/// ```rust
/// use colonpipe::{serialize_pipe, value};
///
/// let value = value!({
///     "name": "John Doe",
///     "tags": ["dev", "python"]
/// });
/// assert_eq!(serialize_pipe(&value), "name|John Doe\ntags|\n    - dev\n    - python");
/// ```
#[must_use]
pub fn serialize_pipe(value: &Value) -> String {
    serialize_pipe_with_options(value, &CodecOptions::default())
}

/// Renders a value as PIPE text, indenting each level by `options.indent` spaces.
///
/// `options.max_depth` is not checked here; hand-built trees deeper than the
/// stack allows overflow it (see [`grammar`](crate::grammar#depth)).
#[must_use]
pub fn serialize_pipe_with_options(value: &Value, options: &CodecOptions) -> String {
    let mut lines = Vec::new();
    write_block(&mut lines, value, 0, options.indent.max(1));
    lines.join("\n")
}

/// The PIPE lines for `value`, starting at indentation `level`.
///
/// Uses the default indentation width.
#[must_use]
pub fn pipe_lines(value: &Value, level: usize) -> Vec<String> {
    let mut lines = Vec::new();
    write_block(&mut lines, value, level, CodecOptions::default().indent);
    lines
}

fn write_block(lines: &mut Vec<String>, value: &Value, level: usize, width: usize) {
    match value {
        Value::Map(map) => {
            let pad = " ".repeat(level * width);
            for (key, item) in map {
                match item {
                    Value::Map(_) | Value::List(_) => {
                        lines.push(format!("{}{}|", pad, key));
                        write_block(lines, item, level + 1, width);
                    }
                    // A blank line when the key is empty too; the parser skips it.
                    Value::String(s) if s.is_empty() => lines.push(format!("{}{}", pad, key)),
                    scalar => lines.push(format!("{}{}|{}", pad, key, scalar_text(scalar))),
                }
            }
        }
        Value::List(items) => {
            let pad = " ".repeat(level * width);
            for item in items {
                match item {
                    // Empty containers leave a bare `-`, which reads back as "".
                    Value::Map(_) | Value::List(_) => {
                        lines.push(format!("{}-", pad));
                        write_block(lines, item, level + 1, width);
                    }
                    Value::String(s) if s.is_empty() => lines.push(format!("{}-", pad)),
                    scalar => lines.push(format!("{}- {}", pad, scalar_text(scalar))),
                }
            }
        }
        scalar => lines.push(format!(
            "{}{}",
            " ".repeat(level * width),
            scalar_text(scalar)
        )),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::String(s) => s.clone(),
        Value::List(_) | Value::Map(_) => serialize_colon(value),
    }
}
