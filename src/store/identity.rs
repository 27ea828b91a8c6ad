//! Identity repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{db::DbPool, keygen::KeyGenerator, models::identity::Identity};

/// Repository for `apikey` rows.
///
/// Owns the key generator: this is the only place API keys are minted.
#[derive(Clone)]
pub struct IdentityStore {
    pool: DbPool,
    keygen: Arc<KeyGenerator>,
}

impl IdentityStore {
    pub fn new(pool: DbPool, keygen: Arc<KeyGenerator>) -> Self {
        Self { pool, keygen }
    }

    /// Create a new identity with a freshly generated API key and both
    /// timestamps set to `now`.
    ///
    /// # Errors
    ///
    /// Any failed write, including a key collision hitting the UNIQUE
    /// constraint. Collisions are not retried; the caller reports an
    /// internal error.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        note: &str,
        now: DateTime<Utc>,
    ) -> Result<Identity, sqlx::Error> {
        let key = self.keygen.generate_key();

        sqlx::query_as::<_, Identity>(
            r#"
            INSERT INTO apikey (created, modified, name, email, key, note)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, created, modified, name, email, key, note
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(name)
        .bind(email)
        .bind(&key)
        .bind(note)
        .fetch_one(&self.pool)
        .await
    }

    /// Look up an identity by its API key.
    ///
    /// Returns `Ok(None)` when no identity carries that key; I/O failures
    /// propagate.
    pub async fn find_by_key(&self, api_key: &str) -> Result<Option<Identity>, sqlx::Error> {
        sqlx::query_as::<_, Identity>(
            r#"
            SELECT id, created, modified, name, email, key, note
            FROM apikey
            WHERE key = ?
            "#,
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
    }
}
