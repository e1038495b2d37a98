//! Staff management feature: roster listing, creation, permission toggles,
//! and removal for superuser accounts.

pub(crate) mod client;
pub(crate) mod types;
