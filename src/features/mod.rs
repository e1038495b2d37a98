//! Feature modules grouping domain logic by concern.

pub(crate) mod auth;
pub(crate) mod interests;
pub(crate) mod staff;
