//! Data models representing database entities.
//!
//! This module contains the structures mapping to the two tables plus the
//! request/response types of the HTTP surface.

/// API key holder model
pub mod identity;
/// Key-value pair model
pub mod pair;
