//! kvss - a simple key-value storage service.
//!
//! Clients register for an API key, then store and retrieve string values
//! under string keys scoped to that key.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (async queries)
//! - **Format**: JSON requests/responses, permissive CORS
//!
//! # HTTP Surface
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | POST | `/api/newapikey/` | register, mint an API key |
//! | GET | `/api/{apikey}` | list all pairs for the key |
//! | GET | `/api/{apikey}/{key}` | get one pair |
//! | PUT | `/api/{apikey}/{key}` | create or update one pair |
//! | GET | `/` | static pointer page |

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod keygen;
pub mod models;
pub mod state;
pub mod store;

use axum::{Router, http::Method, routing::get, routing::post};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;

/// Build the application router.
///
/// Separate from `main` so integration tests can drive the router
/// directly without binding a socket.
pub fn app(state: AppState) -> Router {
    // Every response carries permissive CORS headers; the layer also
    // answers preflight OPTIONS requests.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root::index))
        .route("/api/newapikey/", post(handlers::register::new_api_key))
        .route("/api/{apikey}", get(handlers::pairs::list_pairs))
        .route(
            "/api/{apikey}/{key}",
            get(handlers::pairs::get_value).put(handlers::pairs::put_value),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
