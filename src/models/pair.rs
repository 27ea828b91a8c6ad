//! Key-value pair data model and API request/response types.
//!
//! This module defines:
//! - `Pair`: database entity for one key-value pair
//! - `PutValueRequest`: validated request body for the upsert endpoint
//! - `PairEntry` / `PairResponse`: response bodies returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Maximum byte length accepted for a pair's value.
pub const MAX_VALUE_SIZE: usize = 4096;

/// Represents a key-value pair from the `kvpair` table.
///
/// A pair belongs to exactly one identity (via `owner_id`) and its key is
/// unique within that owner's scope. The key is immutable after creation;
/// only `value` and `modified` change on subsequent writes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Pair {
    /// Store-assigned surrogate key, never exposed in JSON
    pub id: i64,

    /// Timestamp of the first insertion, never updated
    pub created: DateTime<Utc>,

    /// Timestamp of the latest successful value write (including the
    /// initial one)
    pub modified: DateTime<Utc>,

    /// Foreign reference to the owning identity's surrogate id
    pub owner_id: i64,

    /// Client-supplied key, unique per owner
    pub key: String,

    /// The stored value, at most 4096 bytes
    pub value: String,
}

/// Request body for the upsert endpoint.
///
/// The `value` field must be present; its type is checked after decoding
/// so the caller gets a 422 (not a 500) for a non-string value.
#[derive(Debug, Deserialize)]
pub struct PutValueRequest {
    pub value: serde_json::Value,
}

impl PutValueRequest {
    /// Validate and extract the value.
    ///
    /// # Errors
    ///
    /// `AppError::InvalidValue` if the field is not a string or its byte
    /// length exceeds [`MAX_VALUE_SIZE`].
    pub fn into_value(self) -> Result<String, AppError> {
        match self.value {
            serde_json::Value::String(s) if s.len() <= MAX_VALUE_SIZE => Ok(s),
            _ => Err(AppError::InvalidValue(
                "value is not a string or is longer than 4096 bytes".to_string(),
            )),
        }
    }
}

/// One element of the list endpoint's response array.
#[derive(Debug, Serialize)]
pub struct PairEntry {
    pub key: String,
    pub value: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl From<Pair> for PairEntry {
    fn from(pair: Pair) -> Self {
        Self {
            key: pair.key,
            value: pair.value,
            created: pair.created,
            modified: pair.modified,
        }
    }
}

/// Response body for the get and upsert endpoints.
///
/// Echoes the resolved API key alongside the pair fields; surrogate ids
/// are withheld.
#[derive(Debug, Serialize)]
pub struct PairResponse {
    pub key: String,
    pub value: String,
    pub apikey: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl PairResponse {
    pub fn new(pair: Pair, apikey: String) -> Self {
        Self {
            key: pair.key,
            value: pair.value,
            apikey,
            created: pair.created,
            modified: pair.modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: serde_json::Value) -> PutValueRequest {
        PutValueRequest { value }
    }

    #[test]
    fn accepts_a_string_value() {
        let value = request(serde_json::json!("blue")).into_value();
        assert_eq!(value.ok().as_deref(), Some("blue"));
    }

    #[test]
    fn accepts_a_value_of_exactly_4096_bytes() {
        let value = request(serde_json::json!("x".repeat(MAX_VALUE_SIZE))).into_value();
        assert!(value.is_ok());
    }

    #[test]
    fn rejects_a_value_of_4097_bytes() {
        let value = request(serde_json::json!("x".repeat(MAX_VALUE_SIZE + 1))).into_value();
        assert!(matches!(value, Err(AppError::InvalidValue(_))));
    }

    #[test]
    fn rejects_non_string_values() {
        for value in [
            serde_json::json!(12),
            serde_json::json!(null),
            serde_json::json!(["blue"]),
            serde_json::json!({"nested": "blue"}),
        ] {
            assert!(matches!(
                request(value).into_value(),
                Err(AppError::InvalidValue(_))
            ));
        }
    }
}
