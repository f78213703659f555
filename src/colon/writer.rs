//! COLON serialization.

use crate::Value;

/// Characters with structural meaning in COLON text.
pub(crate) const RESERVED: &[char] = &[';', ':', '{', '}', '[', ']', ','];

/// Renders a value as COLON text.
///
/// Reserved characters (`; : { } [ ] ,`) and backslashes inside strings and keys are
/// escaped with a backslash, so [`parse_colon`](crate::parse_colon) reads them back
/// unchanged.
///
/// Writing recurses once per level of nesting and does not check depth; see
/// [`grammar`](crate::grammar#depth).
///
/// # Examples
///
/// ```rust
/// use colonpipe::{serialize_colon, value};
///
/// let value = value!({
///     "name": "John Doe",
///     "tags": ["dev", "python"],
///     "note": "a;b"
/// });
/// assert_eq!(serialize_colon(&value), r"{name:John Doe;tags:[dev,python];note:a\;b}");
/// ```
#[must_use]
pub fn serialize_colon(value: &Value) -> String {
    let mut output = String::with_capacity(64);
    write_value(&mut output, value);
    output
}

fn write_value(output: &mut String, value: &Value) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => output.push_str(&i.to_string()),
        Value::Float(f) => output.push_str(&format_float(*f)),
        Value::String(s) => write_escaped(output, s),
        Value::List(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_value(output, item);
            }
            output.push(']');
        }
        Value::Map(map) => {
            output.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    output.push(';');
                }
                write_escaped(output, key);
                output.push(':');
                write_value(output, item);
            }
            output.push('}');
        }
    }
}

fn write_escaped(output: &mut String, s: &str) {
    for ch in s.chars() {
        if ch == '\\' || RESERVED.contains(&ch) {
            output.push('\\');
        }
        output.push(ch);
    }
}

/// Decimal text for a float that always re-reads as a float.
///
/// Non-finite values have no such form and come out as `NaN`, `inf` and `-inf`.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        let text = if f > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    let mut text = f.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMap;

    #[test]
    fn test_scalars() {
        assert_eq!(serialize_colon(&Value::Null), "null");
        assert_eq!(serialize_colon(&Value::from(false)), "false");
        assert_eq!(serialize_colon(&Value::from(-12)), "-12");
        assert_eq!(serialize_colon(&Value::from("plain text")), "plain text");
    }

    #[test]
    fn test_floats_keep_a_decimal_point() {
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(serialize_colon(&Value::from("a,b")), r"a\,b");
        assert_eq!(serialize_colon(&Value::from("{x}")), r"\{x\}");
        assert_eq!(serialize_colon(&Value::from(r"C:\tmp")), r"C\:\\tmp");
        assert_eq!(serialize_colon(&Value::from(r"back\slash")), r"back\\slash");
    }

    #[test]
    fn test_keys_are_escaped() {
        let mut map = ValueMap::new();
        map.insert("a:b".to_string(), Value::from(1));
        assert_eq!(serialize_colon(&Value::Map(map)), r"{a\:b:1}");
    }

    #[test]
    fn test_nested() {
        let mut inner = ValueMap::new();
        inner.insert("city".to_string(), Value::from("Delhi"));
        inner.insert("zip".to_string(), Value::from(110001));
        let value = Value::List(vec![Value::Map(inner), Value::List(vec![])]);
        assert_eq!(serialize_colon(&value), "[{city:Delhi;zip:110001},[]]");
    }
}
