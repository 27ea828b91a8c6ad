//! Key-value pair repository.

use chrono::{DateTime, Utc};

use crate::{db::DbPool, models::pair::Pair};

/// Repository for `kvpair` rows, always addressed through an owner's
/// surrogate id.
#[derive(Clone)]
pub struct PairStore {
    pool: DbPool,
}

impl PairStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All pairs belonging to one owner, in insertion order. An owner
    /// with no pairs yields an empty vector, not an error.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Pair>, sqlx::Error> {
        sqlx::query_as::<_, Pair>(
            r#"
            SELECT id, created, modified, owner_id, key, value
            FROM kvpair
            WHERE owner_id = ?
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Look up one pair by (owner, key). At most one row exists thanks to
    /// the UNIQUE constraint.
    pub async fn find(&self, owner_id: i64, key: &str) -> Result<Option<Pair>, sqlx::Error> {
        sqlx::query_as::<_, Pair>(
            r#"
            SELECT id, created, modified, owner_id, key, value
            FROM kvpair
            WHERE owner_id = ? AND key = ?
            "#,
        )
        .bind(owner_id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a brand-new pair.
    ///
    /// The caller guarantees (owner_id, key) does not already exist; two
    /// concurrent creates for the same pair race, and the loser fails here
    /// on the UNIQUE constraint.
    pub async fn insert(
        &self,
        owner_id: i64,
        key: &str,
        value: &str,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Result<Pair, sqlx::Error> {
        sqlx::query_as::<_, Pair>(
            r#"
            INSERT INTO kvpair (created, modified, owner_id, key, value)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, created, modified, owner_id, key, value
            "#,
        )
        .bind(created)
        .bind(modified)
        .bind(owner_id)
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await
    }

    /// Replace the value and modified timestamp of an existing pair,
    /// addressed by its surrogate id. `created`, `key` and `owner_id` are
    /// untouched.
    pub async fn update_value(
        &self,
        pair_id: i64,
        value: &str,
        modified: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE kvpair SET value = ?, modified = ? WHERE id = ?")
            .bind(value)
            .bind(modified)
            .bind(pair_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
