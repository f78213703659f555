//! Recursive-descent parser for COLON text.

use super::writer::RESERVED;
use crate::coerce::coerce;
use crate::cursor::Cursor;
use crate::{CodecOptions, Result, Value, ValueMap};

/// Characters that end a scalar in a map-value position.
const VALUE_STOPS: &[char] = &[';', '}', ']'];
/// Characters that end a scalar in a list-element position.
const ELEMENT_STOPS: &[char] = &[',', ']'];
const KEY_STOPS: &[char] = &[':'];

/// Parses COLON text with default (strict) options.
///
/// # Examples
///
/// ```rust
/// use colonpipe::{parse_colon, Value};
///
/// let value = parse_colon("name:John Doe;age:30;tags:[dev,python]").unwrap();
/// assert_eq!(value.get("name"), Some(&Value::from("John Doe")));
/// assert_eq!(value.get("age"), Some(&Value::from(30)));
/// assert_eq!(
///     value.get("tags"),
///     Some(&Value::List(vec![Value::from("dev"), Value::from("python")]))
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedInput`](crate::Error::MalformedInput) for unterminated
/// structures or stray characters, and
/// [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded) for input
/// nested deeper than the default limit.
pub fn parse_colon(text: &str) -> Result<Value> {
    parse_colon_with_options(text, &CodecOptions::default())
}

/// Parses COLON text.
///
/// A document starting with `{` or `[` is a single object or list. Anything else is
/// an implicit top-level object of `key:value` pairs separated by `;`.
///
/// # Errors
///
/// See [`parse_colon`]. In lenient mode only the recursion limit is an error.
pub fn parse_colon_with_options(text: &str, options: &CodecOptions) -> Result<Value> {
    log::debug!("parsing COLON document ({} bytes)", text.len());
    let mut cur = Cursor::new(text);
    cur.skip_whitespace();

    let value = match cur.peek() {
        Some('{') => parse_object(&mut cur, options, 1)?,
        Some('[') => parse_list(&mut cur, options, 1)?,
        _ => return parse_implicit_object(&mut cur, options),
    };

    cur.skip_whitespace();
    if !cur.at_end() {
        if !options.lenient {
            return Err(cur.malformed("unexpected characters after document"));
        }
        log::warn!(
            "ignoring trailing COLON input at line {}, column {}",
            cur.line(),
            cur.column()
        );
    }
    Ok(value)
}

/// A scalar token with escapes already resolved.
struct Token {
    text: String,
    escaped: bool,
    /// First unescaped reserved character inside the token, with its line and column.
    stray: Option<(char, usize, usize)>,
}

impl Token {
    fn key(&self) -> String {
        self.text.trim().to_string()
    }

    /// Escaped tokens are always strings.
    fn into_value(self) -> Value {
        if self.escaped {
            Value::String(self.text.trim().to_string())
        } else {
            coerce(&self.text)
        }
    }
}

fn read_token(cur: &mut Cursor<'_>, stops: &[char]) -> Token {
    let mut text = String::new();
    let mut escaped = false;
    let mut stray = None;
    while let Some(ch) = cur.peek() {
        if stops.contains(&ch) {
            break;
        }
        if stray.is_none() && ch != ':' && RESERVED.contains(&ch) {
            stray = Some((ch, cur.line(), cur.column()));
        }
        cur.next_char();
        if ch == '\\' {
            match cur.next_char() {
                Some(literal) => {
                    text.push(literal);
                    escaped = true;
                }
                None => text.push('\\'),
            }
        } else {
            text.push(ch);
        }
    }
    Token {
        text,
        escaped,
        stray,
    }
}

fn enter(cur: &Cursor<'_>, options: &CodecOptions, depth: usize) -> Result<()> {
    if depth > options.max_depth {
        return Err(cur.recursion_limit(options.max_depth));
    }
    Ok(())
}

/// Fails in strict mode; logs and lets the caller close the structure otherwise.
fn unterminated(cur: &Cursor<'_>, options: &CodecOptions, msg: &str) -> Result<()> {
    if !options.lenient {
        return Err(cur.malformed(msg));
    }
    log::warn!("{} at line {}; closing at end of input", msg, cur.line());
    Ok(())
}

/// `value := object | list | scalar-token`; `depth` is that of the enclosing structure.
fn parse_value(
    cur: &mut Cursor<'_>,
    options: &CodecOptions,
    depth: usize,
    stops: &[char],
) -> Result<Value> {
    cur.skip_whitespace();
    match cur.peek() {
        Some('{') => parse_object(cur, options, depth + 1),
        Some('[') => parse_list(cur, options, depth + 1),
        _ => Ok(read_token(cur, stops).into_value()),
    }
}

/// Reads one `key:value` pair into `map`.
///
/// Keys only stop at `:`, so a key that swallowed an unescaped `;`, bracket or comma
/// is rejected in strict mode. This covers repeated or leading `;` as well.
fn parse_entry(
    cur: &mut Cursor<'_>,
    options: &CodecOptions,
    depth: usize,
    map: &mut ValueMap,
) -> Result<()> {
    let token = read_token(cur, KEY_STOPS);
    let key = token.key();
    if let Some((ch, line, col)) = token.stray {
        let msg = format!("unescaped '{}' in key", ch);
        if !options.lenient {
            return Err(cur.malformed_at(line, col, &msg));
        }
        log::warn!("{} {:?} at line {}, column {}", msg, key, line, col);
    }
    if !cur.eat(':') {
        if !options.lenient {
            return Err(cur.malformed("expected ':' after key"));
        }
        log::warn!("key {:?} has no ':'; using an empty value", key);
        map.insert(key, Value::String(String::new()));
        return Ok(());
    }
    let value = parse_value(cur, options, depth, VALUE_STOPS)?;
    map.insert(key, value);
    Ok(())
}

fn parse_object(cur: &mut Cursor<'_>, options: &CodecOptions, depth: usize) -> Result<Value> {
    enter(cur, options, depth)?;
    log::trace!("object at line {}, column {}", cur.line(), cur.column());
    cur.next_char(); // '{'

    let mut map = ValueMap::new();
    loop {
        cur.skip_whitespace();
        if cur.eat('}') {
            break;
        }
        if cur.at_end() {
            unterminated(cur, options, "unterminated object, expected '}'")?;
            break;
        }

        parse_entry(cur, options, depth, &mut map)?;

        cur.skip_whitespace();
        if cur.eat(';') {
            continue;
        }
        match cur.peek() {
            Some('}') => {}
            None => {
                unterminated(cur, options, "unterminated object, expected '}'")?;
                break;
            }
            Some(_) => {
                if !options.lenient {
                    return Err(cur.malformed("expected ';' or '}' after value"));
                }
                log::warn!(
                    "missing ';' at line {}, column {}; reading next key",
                    cur.line(),
                    cur.column()
                );
            }
        }
    }
    Ok(Value::Map(map))
}

fn parse_list(cur: &mut Cursor<'_>, options: &CodecOptions, depth: usize) -> Result<Value> {
    enter(cur, options, depth)?;
    log::trace!("list at line {}, column {}", cur.line(), cur.column());
    cur.next_char(); // '['

    let mut items = Vec::new();
    loop {
        cur.skip_whitespace();
        if cur.eat(']') {
            break;
        }
        if cur.at_end() {
            unterminated(cur, options, "unterminated list, expected ']'")?;
            break;
        }

        items.push(parse_value(cur, options, depth, ELEMENT_STOPS)?);

        cur.skip_whitespace();
        if cur.eat(',') {
            continue;
        }
        match cur.peek() {
            Some(']') => {}
            None => {
                unterminated(cur, options, "unterminated list, expected ']'")?;
                break;
            }
            Some(_) => {
                if !options.lenient {
                    return Err(cur.malformed("expected ',' or ']' after list element"));
                }
                log::warn!(
                    "missing ',' at line {}, column {}; reading next element",
                    cur.line(),
                    cur.column()
                );
            }
        }
    }
    Ok(Value::List(items))
}

fn parse_implicit_object(cur: &mut Cursor<'_>, options: &CodecOptions) -> Result<Value> {
    enter(cur, options, 1)?;
    let mut map = ValueMap::new();
    loop {
        cur.skip_whitespace();
        if cur.at_end() {
            break;
        }

        parse_entry(cur, options, 1, &mut map)?;

        cur.skip_whitespace();
        if cur.eat(';') {
            continue;
        }
        if cur.at_end() {
            break;
        }
        if !options.lenient {
            return Err(cur.malformed("expected ';' between top-level entries"));
        }
        log::warn!(
            "ignoring COLON input after line {}, column {}",
            cur.line(),
            cur.column()
        );
        break;
    }
    Ok(Value::Map(map))
}
