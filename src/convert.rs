//! Conversion between the two text formats and the in-memory [`Value`].

use std::fmt;
use std::str::FromStr;

use crate::{
    parse_colon_with_options, parse_pipe_with_options, serialize_colon,
    serialize_pipe_with_options, CodecOptions, Error, Result, Value,
};

/// A representation that [`convert`] reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Compact inline text.
    Colon,
    /// Indentation-block text.
    Pipe,
    /// The parsed [`Value`] itself. Valid only as a target.
    Object,
}

impl FromStr for Format {
    type Err = Error;

    /// Accepts `COLON`, `PIPE`, `OBJ` and `OBJECT` in any case.
    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "COLON" => Ok(Format::Colon),
            "PIPE" => Ok(Format::Pipe),
            "OBJ" | "OBJECT" => Ok(Format::Object),
            _ => Err(Error::unsupported_format(tag)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Format::Colon => "COLON",
            Format::Pipe => "PIPE",
            Format::Object => "OBJECT",
        };
        f.write_str(tag)
    }
}

/// The result of a conversion: text for the text formats, a tree for [`Format::Object`].
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Text(String),
    Value(Value),
}

impl Converted {
    /// The text output, if the target was a text format.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Converted::Text(text) => Some(text),
            Converted::Value(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Converted::Text(text) => Some(text),
            Converted::Value(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Converted::Text(_) => None,
            Converted::Value(value) => Some(value),
        }
    }
}

/// Parses `text` as `from` and re-emits it as `to`, with default options.
///
/// # Examples
///
/// ```rust
/// use colonpipe::{convert, Format};
///
/// let pipe = convert("name:John Doe;tags:[dev,python]", Format::Colon, Format::Pipe)
///     .unwrap()
///     .into_text()
///     .unwrap();
/// assert_eq!(pipe, "name|John Doe\ntags|\n    - dev\n    - python");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] when `from` is [`Format::Object`], and any
/// parse error from the source format.
pub fn convert(text: &str, from: Format, to: Format) -> Result<Converted> {
    convert_with_options(text, from, to, &CodecOptions::default())
}

/// Like [`convert`], parsing and writing with `options`.
///
/// # Errors
///
/// See [`convert`].
pub fn convert_with_options(
    text: &str,
    from: Format,
    to: Format,
    options: &CodecOptions,
) -> Result<Converted> {
    log::debug!("converting {} -> {} ({} bytes)", from, to, text.len());

    let value = match from {
        Format::Colon => parse_colon_with_options(text, options)?,
        Format::Pipe => parse_pipe_with_options(text, options)?,
        Format::Object => {
            return Err(Error::unsupported_format(
                "OBJECT is not a text format and cannot be parsed",
            ))
        }
    };

    let converted = match to {
        Format::Colon => Converted::Text(serialize_colon(&value)),
        Format::Pipe => Converted::Text(serialize_pipe_with_options(&value, options)),
        Format::Object => Converted::Value(value),
    };
    log::debug!("converted to {} ({})", to, kind(&converted));
    Ok(converted)
}

/// Like [`convert`], naming the formats by tag (`"COLON"`, `"pipe"`, `"OBJ"`, ...).
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for an unknown tag, before any parsing.
pub fn convert_tags(text: &str, from: &str, to: &str) -> Result<Converted> {
    let from = from.parse()?;
    let to = to.parse()?;
    convert(text, from, to)
}

fn kind(converted: &Converted) -> String {
    match converted {
        Converted::Text(text) => format!("{} bytes", text.len()),
        Converted::Value(value) => value.type_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags() {
        assert_eq!("COLON".parse::<Format>().unwrap(), Format::Colon);
        assert_eq!("pipe".parse::<Format>().unwrap(), Format::Pipe);
        assert_eq!("Obj".parse::<Format>().unwrap(), Format::Object);
        assert_eq!("OBJECT".parse::<Format>().unwrap(), Format::Object);
        assert!(matches!(
            "YAML".parse::<Format>(),
            Err(Error::UnsupportedFormat(tag)) if tag == "YAML"
        ));
    }

    #[test]
    fn test_colon_to_object() {
        let converted = convert("a:1", Format::Colon, Format::Object).unwrap();
        assert_eq!(converted.as_text(), None);
        let value = converted.into_value().unwrap();
        assert_eq!(value.get("a"), Some(&Value::from(1)));
    }

    #[test]
    fn test_pipe_to_colon() {
        let converted = convert("a|1\nb|\n    - x", Format::Pipe, Format::Colon).unwrap();
        assert_eq!(converted.as_text(), Some("{a:1;b:[x]}"));
    }

    #[test]
    fn test_object_source_is_rejected() {
        let err = convert("a:1", Format::Object, Format::Colon).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!(matches!(
            convert_tags("a:1", "COLON", "XML"),
            Err(Error::UnsupportedFormat(_))
        ));
        let text = convert_tags("a:1", "colon", "colon").unwrap().into_text();
        assert_eq!(text.as_deref(), Some("{a:1}"));
    }

    #[test]
    fn test_options_reach_both_sides() {
        let options = CodecOptions::new().with_indent(2);
        let converted =
            convert_with_options("a|\n  b|1", Format::Pipe, Format::Pipe, &options).unwrap();
        assert_eq!(converted.as_text(), Some("a|\n  b|1"));
    }

    #[test]
    fn test_parse_errors_propagate() {
        assert!(matches!(
            convert("a:[1", Format::Colon, Format::Pipe),
            Err(Error::MalformedInput { .. })
        ));
    }
}
