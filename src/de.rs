//! Serde deserializer that reads Rust types out of a [`Value`] tree.
//!
//! Text is parsed into a [`Value`] first (see [`crate::from_colon_str`] and
//! [`crate::from_pipe_str`]), then [`from_value`] drives any `Deserialize` impl from
//! it.
//!
//! Scalars are coerced from text during parsing, so a field declared as `String`
//! may arrive as an int, float, bool or null. Those are handed to the visitor as
//! their text. Likewise a `Vec` field accepts an empty map, which is what an empty
//! PIPE block parses to.
//!
//! ```rust
//! use serde::Deserialize;
//! use colonpipe::{from_value, parse_colon};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Address {
//!     city: String,
//!     zip: String,
//! }
//!
//! let value = parse_colon("city:Delhi;zip:110001").unwrap();
//! let address: Address = from_value(value).unwrap();
//! assert_eq!(address.zip, "110001");
//! ```

use num_bigint::BigInt;
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

use crate::colon::format_float;
use crate::{Error, Result, Value, ValueMap};

/// Deserializes a `T` from an owned [`Value`].
///
/// # Errors
///
/// Returns [`Error::Custom`] when the value's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// A [`serde::Deserializer`] that owns the [`Value`] it reads from.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}

fn visit_int<'de, V>(i: BigInt, visitor: V) -> Result<V::Value>
where
    V: Visitor<'de>,
{
    if let Ok(n) = i64::try_from(&i) {
        visitor.visit_i64(n)
    } else if let Ok(n) = u64::try_from(&i) {
        visitor.visit_u64(n)
    } else if let Ok(n) = i128::try_from(&i) {
        visitor.visit_i128(n)
    } else if let Ok(n) = u128::try_from(&i) {
        visitor.visit_u128(n)
    } else {
        visitor.visit_string(i.to_string())
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(i) => visit_int(i, visitor),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::List(items) => visitor.visit_seq(ListReader::new(items)),
            Value::Map(map) => visitor.visit_map(MapReader::new(map)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_str("null"),
            Value::Bool(b) => visitor.visit_string(b.to_string()),
            Value::Int(i) => visitor.visit_string(i.to_string()),
            Value::Float(f) => visitor.visit_string(format_float(f)),
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Map(map) if map.is_empty() => visitor.visit_seq(ListReader::new(Vec::new())),
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(VariantReader {
                name: variant,
                payload: None,
            }),
            Value::Map(map) if map.len() == 1 => match map.into_iter().next() {
                Some((variant, value)) => visitor.visit_enum(VariantReader {
                    name: variant,
                    payload: Some(value),
                }),
                None => Err(Error::custom("expected a single-entry map for an enum")),
            },
            other => Err(Error::custom(format!(
                "expected an enum variant, found {}",
                other.type_name()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char
        bytes byte_buf unit unit_struct tuple
        tuple_struct map struct identifier ignored_any
    }
}

/// Feeds list elements to a `SeqAccess` visitor.
struct ListReader {
    items: std::vec::IntoIter<Value>,
}

impl ListReader {
    fn new(items: Vec<Value>) -> Self {
        ListReader {
            items: items.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for ListReader {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        self.items
            .next()
            .map(|item| seed.deserialize(ValueDeserializer::new(item)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

/// Feeds map entries to a `MapAccess` visitor, holding each value until it is asked for.
struct MapReader {
    entries: indexmap::map::IntoIter<String, Value>,
    pending: Option<Value>,
}

impl MapReader {
    fn new(map: ValueMap) -> Self {
        MapReader {
            entries: map.into_iter(),
            pending: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapReader {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        let (key, value) = match self.entries.next() {
            Some(entry) => entry,
            None => return Ok(None),
        };
        self.pending = Some(value);
        seed.deserialize(ValueDeserializer::new(Value::String(key)))
            .map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        let value = self
            .pending
            .take()
            .ok_or_else(|| Error::custom("map value requested before its key"))?;
        seed.deserialize(ValueDeserializer::new(value))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

/// An enum variant name with its payload, if the variant came from a one-entry map.
struct VariantReader {
    name: String,
    payload: Option<Value>,
}

impl VariantReader {
    fn payload(self, kind: &str) -> Result<ValueDeserializer> {
        match self.payload {
            Some(value) => Ok(ValueDeserializer::new(value)),
            None => Err(Error::custom(format!(
                "variant {} has no payload, expected a {} variant",
                self.name, kind
            ))),
        }
    }
}

impl<'de> de::EnumAccess<'de> for VariantReader {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let tag = seed.deserialize(ValueDeserializer::new(Value::String(self.name.clone())))?;
        Ok((tag, self))
    }
}

impl<'de> de::VariantAccess<'de> for VariantReader {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.payload {
            None | Some(Value::Null) => Ok(()),
            Some(other) => Err(Error::custom(format!(
                "unit variant {} has a {} payload",
                self.name,
                other.type_name()
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.payload("newtype")?)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(self.payload("tuple")?, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.payload("struct")?, visitor)
    }
}
