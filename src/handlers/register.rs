//! Registration HTTP handler.
//!
//! `POST /api/newapikey/` — the only place an API key is minted.

use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    models::identity::{IdentityResponse, RegisterRequest},
    state::AppState,
};

/// Register a new identity and mint its API key.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "note": "weather station"
/// }
/// ```
///
/// All fields are optional free-form strings (absent fields become "").
///
/// # Response
///
/// - **Success (200)**: the full identity, including the fresh 32-char
///   `apikey` and both timestamps
/// - **Error (500)**: body is not valid JSON, or the insert failed
///
/// The body is decoded by hand rather than through the `Json` extractor
/// so a decode failure maps to 500, and handling aborts before any key is
/// generated or row inserted.
pub async fn new_api_key(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdentityResponse>, AppError> {
    let request: RegisterRequest = serde_json::from_slice(&body)?;

    let identity = state
        .identities
        .create(&request.name, &request.email, &request.note, state.clock.now())
        .await?;

    tracing::info!(name = %identity.name, "registered new identity");

    Ok(Json(identity.into()))
}
