//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the authenticated REST helpers, `auth` the identity-provider
//! glue, and `types` the JSON schema mirrored from backend responses.

pub mod api;
pub mod auth;
pub mod types;
