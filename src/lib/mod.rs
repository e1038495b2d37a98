//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. The helpers do not store secrets;
//! callers pass bearer tokens per request and must avoid logging credential
//! material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) use api::{
    delete_with_token, get_json_with_token, patch_json_with_token_response, post_json_response,
    post_json_with_token, post_json_with_token_response,
};
pub(crate) use errors::AppError;
