//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (URL params, raw body)
//! 2. Performs business logic (store queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Key-value pair endpoints
pub mod pairs;
/// Identity registration endpoint
pub mod register;
/// Static root page
pub mod root;
