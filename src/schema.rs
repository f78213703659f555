//! Declarative schema validation for [`Value`] trees.
//!
//! A [`Schema`] mirrors the shape a value is expected to have. Validation walks both
//! trees together and collects every mismatch it finds instead of stopping at the
//! first; it never returns an [`Error`](crate::Error).
//!
//! ## Schema Forms
//!
//! - [`Schema::Type`]: the value must be exactly that scalar type. An int does not
//!   satisfy `Float` and a bool does not satisfy `Int`.
//! - [`Schema::Null`]: the value must be null.
//! - [`Schema::Object`]: the value must be a map holding every listed key; each
//!   present key is checked against its sub-schema. Extra keys are allowed.
//! - [`Schema::List`]: the value must be a list; with an element schema, every
//!   element is checked against it.
//! - [`Schema::Predicate`]: a user closure decides. A closure that returns an error
//!   or panics is reported as a violation and validation carries on.
//!
//! ## Paths
//!
//! Violations are located by a path: `/` is the root, `/key` descends into a map and
//! `[index]` into a list, so `/tags[1]` is the second element of the `tags` list and
//! `/[0]` is the first element of a root list.
//!
//! ## Examples
//!
//! ```rust
//! use colonpipe::{parse_colon, validate_schema, Schema};
//!
//! let schema = Schema::object([
//!     ("name", Schema::string()),
//!     ("age", Schema::int()),
//!     ("tags", Schema::list_of(Schema::string())),
//! ]);
//!
//! let value = parse_colon("name:John Doe;age:30;tags:[dev,python]").unwrap();
//! assert!(validate_schema(&value, &schema).is_empty());
//!
//! let value = parse_colon("name:x;tags:[dev,7]").unwrap();
//! assert_eq!(
//!     validate_schema(&value, &schema),
//!     vec!["/age: missing", "/tags[1]: expected string"]
//! );
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::Value;

/// A scalar type that a [`Schema::Type`] requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    String,
    Bool,
}

impl TypeTag {
    /// Exact runtime type match.
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (TypeTag::Int, Value::Int(_))
                | (TypeTag::Float, Value::Float(_))
                | (TypeTag::String, Value::String(_))
                | (TypeTag::Bool, Value::Bool(_))
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::String => "string",
            TypeTag::Bool => "bool",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type CheckFn = dyn Fn(&Value) -> Result<bool, String> + Send + Sync;

/// A user-supplied check, shared cheaply between clones of a schema.
#[derive(Clone)]
pub struct Predicate(Arc<CheckFn>);

impl Predicate {
    /// Wraps an infallible check.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Predicate(Arc::new(move |value: &Value| Ok::<bool, String>(check(value))))
    }

    /// Wraps a check that can fail; an `Err` is reported as a validator exception.
    pub fn fallible<F, E>(check: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Predicate(Arc::new(move |value: &Value| {
            check(value).map_err(|e| e.to_string())
        }))
    }

    /// Runs the check, turning a panic into an `Err`.
    fn call(&self, value: &Value) -> Result<bool, String> {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.0)(value))) {
            Ok(result) => result,
            Err(payload) => Err(panic_message(payload.as_ref())),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

/// The expected shape of a [`Value`].
#[derive(Debug, Clone)]
pub enum Schema {
    Type(TypeTag),
    Null,
    /// Required keys and their schemas, in declaration order.
    Object(IndexMap<String, Schema>),
    /// A list, optionally with a schema every element must satisfy.
    List(Option<Box<Schema>>),
    Predicate(Predicate),
}

impl Schema {
    pub fn int() -> Self {
        Schema::Type(TypeTag::Int)
    }

    pub fn float() -> Self {
        Schema::Type(TypeTag::Float)
    }

    pub fn string() -> Self {
        Schema::Type(TypeTag::String)
    }

    pub fn bool() -> Self {
        Schema::Type(TypeTag::Bool)
    }

    pub fn null() -> Self {
        Schema::Null
    }

    /// An object schema from `(key, schema)` pairs.
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Schema::Object(fields.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    /// A list whose elements all satisfy `element`.
    pub fn list_of(element: Schema) -> Self {
        Schema::List(Some(Box::new(element)))
    }

    /// A list with unconstrained elements.
    pub fn any_list() -> Self {
        Schema::List(None)
    }

    /// A predicate schema from an infallible check.
    ///
    /// ```rust
    /// use colonpipe::{validate_schema, Schema, Value};
    ///
    /// let positive = Schema::predicate(|v| v.as_i64().map_or(false, |n| n > 0));
    /// assert!(validate_schema(&Value::from(3), &positive).is_empty());
    /// assert_eq!(
    ///     validate_schema(&Value::from(-3), &positive),
    ///     vec!["/: custom validator failed"]
    /// );
    /// ```
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Schema::Predicate(Predicate::new(check))
    }

    /// A predicate schema from a check that can fail.
    pub fn try_predicate<F, E>(check: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Schema::Predicate(Predicate::fallible(check))
    }
}

impl From<TypeTag> for Schema {
    fn from(tag: TypeTag) -> Self {
        Schema::Type(tag)
    }
}

/// One failed check: where it happened and what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Checks `value` against `schema`, returning every violation found.
///
/// The walk recurses along with the schema, so its depth is bounded by the
/// schema's nesting rather than the value's.
pub fn validate(value: &Value, schema: &Schema) -> Vec<Violation> {
    let mut validator = Validator::default();
    validator.check(value, schema);
    validator.violations
}

/// Like [`validate`], with each violation rendered as `"path: message"`.
pub fn validate_schema(value: &Value, schema: &Schema) -> Vec<String> {
    validate(value, schema)
        .iter()
        .map(ToString::to_string)
        .collect()
}

enum Segment {
    Key(String),
    Index(usize),
}

#[derive(Default)]
struct Validator {
    path: Vec<Segment>,
    violations: Vec<Violation>,
}

impl Validator {
    fn check(&mut self, value: &Value, schema: &Schema) {
        match schema {
            Schema::Object(fields) => {
                let map = match value {
                    Value::Map(map) => map,
                    _ => return self.report("expected object"),
                };
                for (key, field) in fields {
                    self.path.push(Segment::Key(key.clone()));
                    match map.get(key) {
                        Some(item) => self.check(item, field),
                        None => self.report("missing"),
                    }
                    self.path.pop();
                }
            }
            Schema::List(element) => {
                let items = match value {
                    Value::List(items) => items,
                    _ => return self.report("expected list"),
                };
                if let Some(element) = element {
                    for (i, item) in items.iter().enumerate() {
                        self.path.push(Segment::Index(i));
                        self.check(item, element);
                        self.path.pop();
                    }
                }
            }
            Schema::Type(tag) => {
                if !tag.matches(value) {
                    self.report(&format!("expected {}", tag));
                }
            }
            Schema::Null => {
                if !value.is_null() {
                    self.report("expected null");
                }
            }
            Schema::Predicate(predicate) => match predicate.call(value) {
                Ok(true) => {}
                Ok(false) => self.report("custom validator failed"),
                Err(detail) => {
                    log::debug!(
                        "custom validator at {} raised: {}",
                        self.render_path(),
                        detail
                    );
                    self.report("custom validator exception");
                }
            },
        }
    }

    fn report(&mut self, message: &str) {
        let path = self.render_path();
        self.violations.push(Violation {
            path,
            message: message.to_string(),
        });
    }

    fn render_path(&self) -> String {
        let mut path = String::new();
        for segment in &self.path {
            match segment {
                Segment::Key(key) => {
                    path.push('/');
                    path.push_str(key);
                }
                Segment::Index(i) => {
                    if path.is_empty() {
                        path.push('/');
                    }
                    path.push_str(&format!("[{}]", i));
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMap;

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_exact_type_match() {
        assert!(validate_schema(&Value::from(1), &Schema::int()).is_empty());
        assert_eq!(
            validate_schema(&Value::from(1), &Schema::float()),
            vec!["/: expected float"]
        );
        assert_eq!(
            validate_schema(&Value::from(true), &Schema::int()),
            vec!["/: expected int"]
        );
        assert_eq!(
            validate_schema(&Value::Null, &Schema::string()),
            vec!["/: expected string"]
        );
    }

    #[test]
    fn test_null_schema() {
        assert!(validate_schema(&Value::Null, &Schema::null()).is_empty());
        assert_eq!(
            validate_schema(&Value::from(0), &Schema::null()),
            vec!["/: expected null"]
        );
    }

    #[test]
    fn test_object_does_not_recurse_into_non_map() {
        let schema = Schema::object([("a", Schema::int()), ("b", Schema::int())]);
        assert_eq!(
            validate_schema(&Value::from("x"), &schema),
            vec!["/: expected object"]
        );
    }

    #[test]
    fn test_missing_and_extra_keys() {
        let schema = Schema::object([("a", Schema::int()), ("b", Schema::int())]);
        let value = map(vec![("a", Value::from(1)), ("z", Value::from(9))]);
        assert_eq!(validate_schema(&value, &schema), vec!["/b: missing"]);
    }

    #[test]
    fn test_list_paths() {
        let schema = Schema::object([("tags", Schema::list_of(Schema::string()))]);
        let value = map(vec![(
            "tags",
            Value::List(vec![Value::from("a"), Value::from(2), Value::from(3)]),
        )]);
        assert_eq!(
            validate_schema(&value, &schema),
            vec!["/tags[1]: expected string", "/tags[2]: expected string"]
        );

        let root = Value::List(vec![Value::from(1), Value::from("x")]);
        assert_eq!(
            validate_schema(&root, &Schema::list_of(Schema::int())),
            vec!["/[1]: expected int"]
        );
    }

    #[test]
    fn test_nested_list_of_objects() {
        let schema = Schema::list_of(Schema::object([("id", Schema::int())]));
        let value = Value::List(vec![
            map(vec![("id", Value::from(1))]),
            Value::Map(ValueMap::new()),
        ]);
        assert_eq!(validate_schema(&value, &schema), vec!["/[1]/id: missing"]);
    }

    #[test]
    fn test_any_list() {
        assert!(validate_schema(&Value::List(vec![Value::Null]), &Schema::any_list()).is_empty());
        assert_eq!(
            validate_schema(&Value::from(1), &Schema::any_list()),
            vec!["/: expected list"]
        );
    }

    #[test]
    fn test_predicate_outcomes() {
        let schema = Schema::object([
            ("ok", Schema::predicate(|_| true)),
            ("no", Schema::predicate(|_| false)),
            (
                "err",
                Schema::try_predicate(|_| Err::<bool, _>("bad input")),
            ),
            ("boom", Schema::predicate(|_| panic!("validator blew up"))),
            ("after", Schema::int()),
        ]);
        let value = map(vec![
            ("ok", Value::Null),
            ("no", Value::Null),
            ("err", Value::Null),
            ("boom", Value::Null),
            ("after", Value::from("x")),
        ]);
        assert_eq!(
            validate_schema(&value, &schema),
            vec![
                "/no: custom validator failed",
                "/err: custom validator exception",
                "/boom: custom validator exception",
                "/after: expected int",
            ]
        );
    }

    #[test]
    fn test_structured_violations() {
        let schema = Schema::object([("age", Schema::int())]);
        let violations = validate(&map(vec![]), &schema);
        assert_eq!(
            violations,
            vec![Violation {
                path: "/age".to_string(),
                message: "missing".to_string(),
            }]
        );
    }

    #[test]
    fn test_schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
        assert_send_sync::<Violation>();
    }
}
