//! Strict decoding over a buffered JSON value.
//!
//! [`from_value`] decodes a borrowed [`Value`] while rejecting object keys the
//! target record does not declare. The check applies at every depth: nested
//! records, arrays of records and map values all pass through the same view.
//! Records are only accepted from JSON objects, never from arrays. Union
//! alternatives are tried against this view so that a record can only claim a
//! payload whose every key it understands.

use serde::{Deserialize, Deserializer};
use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Unexpected, Visitor};
use serde_json::{Map, Value};

/// Decodes `value` into `T`, failing on any undeclared record key.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] when the value does not match
/// the shape of `T` or carries a key `T` does not declare.
pub fn from_value<'de, T>(value: &'de Value) -> Result<T, serde_json::Error>
where
    T: Deserialize<'de>,
{
    T::deserialize(StrictDeserializer::new(value))
}

/// Borrowing deserializer that enforces declared record fields.
#[derive(Clone, Copy)]
pub(crate) struct StrictDeserializer<'de> {
    value: &'de Value,
}

impl<'de> StrictDeserializer<'de> {
    pub(crate) const fn new(value: &'de Value) -> Self {
        Self { value }
    }
}

macro_rules! delegate_to_value {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Self::Error>
            where
                V: Visitor<'de>,
            {
                self.value.$method(visitor)
            }
        )+
    };
}

impl<'de> Deserializer<'de> for StrictDeserializer<'de> {
    type Error = serde_json::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Array(items) => visit_array(items, visitor),
            Value::Object(entries) => visit_object(entries, visitor),
            scalar => scalar.deserialize_any(visitor),
        }
    }

    delegate_to_value! {
        deserialize_bool,
        deserialize_i8,
        deserialize_i16,
        deserialize_i32,
        deserialize_i64,
        deserialize_u8,
        deserialize_u16,
        deserialize_u32,
        deserialize_u64,
        deserialize_f32,
        deserialize_f64,
        deserialize_char,
        deserialize_str,
        deserialize_string,
        deserialize_bytes,
        deserialize_byte_buf,
        deserialize_unit,
        deserialize_identifier,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit_struct<V>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.value.deserialize_unit_struct(name, visitor)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Array(items) => visit_array(items, visitor),
            other => other.deserialize_seq(visitor),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Object(entries) => visit_object(entries, visitor),
            other => other.deserialize_map(visitor),
        }
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Object(entries) => {
                if let Some(unknown) = entries.keys().find(|key| !fields.contains(&key.as_str())) {
                    return Err(de::Error::unknown_field(unknown, fields));
                }
                visit_object(entries, visitor)
            }
            Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &visitor)),
            other => other.deserialize_struct(name, fields, visitor),
        }
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.value.deserialize_enum(name, variants, visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

fn visit_array<'de, V>(items: &'de [Value], visitor: V) -> Result<V::Value, serde_json::Error>
where
    V: Visitor<'de>,
{
    let total = items.len();
    let mut access = StrictSeq { iter: items.iter() };
    let decoded = visitor.visit_seq(&mut access)?;
    if access.iter.len() == 0 {
        Ok(decoded)
    } else {
        Err(de::Error::invalid_length(total, &"fewer elements in array"))
    }
}

fn visit_object<'de, V>(
    entries: &'de Map<String, Value>,
    visitor: V,
) -> Result<V::Value, serde_json::Error>
where
    V: Visitor<'de>,
{
    let mut access = StrictMap {
        iter: entries.iter(),
        pending: None,
    };
    visitor.visit_map(&mut access)
}

struct StrictSeq<'de> {
    iter: std::slice::Iter<'de, Value>,
}

impl<'de> SeqAccess<'de> for StrictSeq<'de> {
    type Error = serde_json::Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        self.iter
            .next()
            .map(|item| seed.deserialize(StrictDeserializer::new(item)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct StrictMap<'de> {
    iter: serde_json::map::Iter<'de>,
    pending: Option<&'de Value>,
}

impl<'de> MapAccess<'de> for StrictMap<'de> {
    type Error = serde_json::Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.pending = Some(value);
                seed.deserialize(BorrowedStrDeserializer::<serde_json::Error>::new(key.as_str()))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        match self.pending.take() {
            Some(value) => seed.deserialize(StrictDeserializer::new(value)),
            None => Err(de::Error::custom("map value requested before its key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}
