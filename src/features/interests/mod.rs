//! Sector interest feature: the fixed sector catalog plus the remote
//! selection endpoints.

pub(crate) mod catalog;
pub(crate) mod client;
pub(crate) mod types;
