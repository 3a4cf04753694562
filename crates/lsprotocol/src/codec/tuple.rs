//! Fixed two-element JSON arrays.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A pair encoded as a JSON array of exactly two elements.
///
/// Decoding rejects arrays shorter or longer than two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tuple<A, B>(pub A, pub B);

impl<A, B> Tuple<A, B> {
    /// Builds a pair from its elements.
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self(first, second)
    }

    /// Returns the first element.
    #[must_use]
    pub const fn first(&self) -> &A {
        &self.0
    }

    /// Returns the second element.
    #[must_use]
    pub const fn second(&self) -> &B {
        &self.1
    }

    /// Splits the pair into a native tuple.
    #[must_use]
    pub fn into_inner(self) -> (A, B) {
        (self.0, self.1)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self(first, second)
    }
}

impl<A, B> Serialize for Tuple<A, B>
where
    A: Serialize,
    B: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.0)?;
        pair.serialize_element(&self.1)?;
        pair.end()
    }
}

impl<'de, A, B> Deserialize<'de> for Tuple<A, B>
where
    A: Deserialize<'de>,
    B: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, PairVisitor(PhantomData))
    }
}

struct PairVisitor<A, B>(PhantomData<(A, B)>);

impl<'de, A, B> Visitor<'de> for PairVisitor<A, B>
where
    A: Deserialize<'de>,
    B: Deserialize<'de>,
{
    type Value = Tuple<A, B>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an array of exactly two elements")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: SeqAccess<'de>,
    {
        let first = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let second = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(Tuple(first, second))
    }
}
