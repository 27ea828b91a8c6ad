//! Repository types wrapping all database access.
//!
//! Handlers never issue SQL themselves; they go through these stores so
//! the business logic stays decoupled from the persistence engine.

/// Identity (API key holder) repository
pub mod identity;
/// Key-value pair repository
pub mod pair;
