//! Field-level lenient decoding.
//!
//! A field that is present but has the wrong JSON type decodes to its
//! `Default` instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn lenient<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(de)?;
    if raw.is_null() {
        return Ok(T::default());
    }
    match T::deserialize(raw) {
        Ok(v) => Ok(v),
        Err(e) => {
            tracing::debug!(error = %e, "mistyped field, using default");
            Ok(T::default())
        }
    }
}
