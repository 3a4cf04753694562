//! Field helper for optional properties that also admit `null`.
//!
//! The schema distinguishes three states for such a property: absent, present
//! as `null` and present with a value. They map onto `Option<Option<T>>` as
//! `None`, `Some(None)` and `Some(Some(value))`. Pair this helper with
//! `#[serde(default)]` so that absence falls back to `None`, and with
//! `skip_serializing_if = "Option::is_none"` so that absence round-trips.

use serde::{Deserialize, Deserializer};

/// Decodes a present field, keeping an explicit `null` as `Some(None)`.
///
/// # Errors
///
/// Propagates the inner decoder's error.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Decodes a present field whose type already represents `null` itself,
/// such as a raw JSON value, so that `null` stays distinguishable from
/// absence.
///
/// # Errors
///
/// Propagates the inner decoder's error.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
