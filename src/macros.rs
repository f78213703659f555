/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys are string literals and keep their written order. Any other
/// expression goes through `Value::from`.
///
/// ```rust
/// use colonpipe::{value, Value};
///
/// let v = value!({
///     "name": "John Doe",
///     "age": 30,
///     "tags": ["dev", "python"],
///     "manager": null
/// });
/// assert_eq!(v.get("age"), Some(&Value::from(30)));
/// assert_eq!(v.to_string(), "{name:John Doe;age:30;tags:[dev,python];manager:null}");
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Map(map)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
