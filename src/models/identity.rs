//! Identity (API key holder) data model and API request/response types.
//!
//! This module defines:
//! - `Identity`: database entity for one registered client
//! - `RegisterRequest`: request body for registration
//! - `IdentityResponse`: response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a registered client from the `apikey` table.
///
/// Created exactly once by registration; never mutated or deleted by any
/// other operation. The surrogate `id` is used to scope pair queries and
/// is never serialized.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Identity {
    /// Store-assigned surrogate key, never exposed in JSON
    pub id: i64,

    /// Timestamp when the identity was created
    pub created: DateTime<Utc>,

    /// Set to the creation time and never updated afterwards; there is no
    /// identity-update endpoint
    pub modified: DateTime<Utc>,

    /// Free-form display name supplied by the client
    pub name: String,

    /// Free-form email supplied by the client; not validated
    pub email: String,

    /// The 32-character API key, unique across all identities.
    ///
    /// This is the only externally visible identifier for the record.
    pub key: String,

    /// Free-form note supplied by the client
    pub note: String,
}

/// Request body for registering a new identity.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "note": "weather station"
/// }
/// ```
///
/// All three fields are free-form strings with no validation beyond JSON
/// decodability; absent fields default to the empty string.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub note: String,
}

/// Response body for the registration endpoint.
///
/// Carries the freshly minted key under the `apikey` field. The surrogate
/// id is withheld.
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub name: String,
    pub email: String,
    pub note: String,
    pub apikey: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            name: identity.name,
            email: identity.email,
            note: identity.note,
            apikey: identity.key,
            created: identity.created,
            modified: identity.modified,
        }
    }
}
