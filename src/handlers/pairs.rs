//! Key-value pair HTTP handlers.
//!
//! This module implements the pair-related API endpoints:
//! - GET /api/{apikey} - List all pairs for an identity
//! - GET /api/{apikey}/{key} - Get one pair
//! - PUT /api/{apikey}/{key} - Create or update one pair
//!
//! Every handler first resolves the API key to an identity; an unknown
//! key fails as 404 with no hint whether the apikey or the pair key was
//! the missing piece.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    models::pair::{Pair, PairEntry, PairResponse, PutValueRequest},
    state::AppState,
};

/// List all pairs stored under an API key.
///
/// # Response
///
/// - **Success (200)**: array of `{key, value, created, modified}`, empty
///   for a freshly registered identity — never 404
/// - **Error (404)**: unknown apikey, or the listing itself failed
///
/// A listing failure is reported as 404 rather than 500; an unknown key
/// and a broken listing are indistinguishable to the client.
pub async fn list_pairs(
    State(state): State<AppState>,
    Path(apikey): Path<String>,
) -> Result<Json<Vec<PairEntry>>, AppError> {
    let identity = state
        .identities
        .find_by_key(&apikey)
        .await?
        .ok_or(AppError::NotFound)?;

    let pairs = state
        .pairs
        .list_by_owner(identity.id)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to list pairs");
            AppError::NotFound
        })?;

    let entries: Vec<PairEntry> = pairs.into_iter().map(Into::into).collect();

    Ok(Json(entries))
}

/// Get a single pair by API key and key.
///
/// # Response
///
/// - **Success (200)**: `{key, value, apikey, created, modified}`
/// - **Error (404)**: apikey or key unknown (reported identically)
pub async fn get_value(
    State(state): State<AppState>,
    Path((apikey, key)): Path<(String, String)>,
) -> Result<Json<PairResponse>, AppError> {
    let identity = state
        .identities
        .find_by_key(&apikey)
        .await?
        .ok_or(AppError::NotFound)?;

    let pair = state
        .pairs
        .find(identity.id, &key)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(PairResponse::new(pair, identity.key)))
}

/// What a PUT will do once its body validates.
///
/// Staged before the body is read: a brand-new pair fixes its `created`
/// timestamp at the moment of the absence check, an existing pair keeps
/// its row (and so its `created` and id).
enum WriteIntent {
    Create { created: DateTime<Utc> },
    Update(Pair),
}

/// Create or update a pair.
///
/// # Flow
///
/// 1. Resolve the identity; unknown apikey → 404
/// 2. Probe for the pair and stage the write intent
/// 3. Validate the body: `{value}` where value is a string of at most
///    4096 bytes; violation → 422 with a plain-text message, no write
/// 4. Apply the staged intent with `modified` = now
///
/// # Response
///
/// - **Success (200)**: `{key, value, apikey, created, modified}` of the
///   now-current record
/// - **Error (422)**: invalid body or value
/// - **Error (404)**: unknown apikey
/// - **Error (500)**: store failure
///
/// Steps 2 and 4 are not atomic as a unit: two concurrent PUTs for the
/// same (apikey, key) can both stage a create, and the loser fails on the
/// UNIQUE constraint as 500. It is not retried as an update.
pub async fn put_value(
    State(state): State<AppState>,
    Path((apikey, key)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<PairResponse>, AppError> {
    let identity = state
        .identities
        .find_by_key(&apikey)
        .await?
        .ok_or(AppError::NotFound)?;

    let intent = match state.pairs.find(identity.id, &key).await? {
        Some(pair) => WriteIntent::Update(pair),
        None => WriteIntent::Create {
            created: state.clock.now(),
        },
    };

    // Malformed JSON and a missing `value` field land here as 422, same
    // as a non-string or oversized value.
    let request: PutValueRequest = serde_json::from_slice(&body).map_err(|_| {
        AppError::InvalidValue("value is not a string or is longer than 4096 bytes".to_string())
    })?;
    let value = request.into_value()?;

    let modified = state.clock.now();

    let pair = match intent {
        WriteIntent::Create { created } => {
            state
                .pairs
                .insert(identity.id, &key, &value, created, modified)
                .await?
        }
        WriteIntent::Update(pair) => {
            state.pairs.update_value(pair.id, &value, modified).await?;
            Pair {
                value,
                modified,
                ..pair
            }
        }
    };

    Ok(Json(PairResponse::new(pair, identity.key)))
}
