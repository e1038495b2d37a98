//! Auth feature module covering session persistence, the identity API
//! gateway, and route guards. It keeps authentication logic out of the UI.
//! This module touches credential material and must avoid logging secrets or
//! tokens.
//!
//! Flow Overview: Signup and login exchange credentials for `{access,
//! refresh, user}` in a single request each. The session is persisted as one
//! versioned envelope and hydrated on startup. A rejected token refresh ends
//! the session; logout is purely local.

pub(crate) mod client;
pub(crate) mod errors;
mod guards;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod types;

pub(crate) use guards::{PublicOnly, RequireAuth};
