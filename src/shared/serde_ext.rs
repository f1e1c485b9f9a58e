//! Serde helpers for request bodies

use serde::{Deserialize, Deserializer};

/// Distinguish an absent field from an explicit `null`
///
/// Use together with `#[serde(default)]`: absent → `None`,
/// `null` → `Some(None)`, value → `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
