//! Client helpers for staff endpoints. The backend scopes the collection to
//! the owning account of the bearer token and enforces the superuser check;
//! the UI-level gate is convenience only.

use crate::{
    app_lib::{
        AppError, delete_with_token, get_json_with_token, patch_json_with_token_response,
        post_json_with_token_response,
    },
    features::staff::types::{StaffCreateRequest, StaffMember, StaffUpdateRequest},
};

/// Fetches the staff roster for the authenticated account.
pub async fn list_staff(access: &str) -> Result<Vec<StaffMember>, AppError> {
    get_json_with_token("/api/staff/", access).await
}

/// Creates a staff member with default (no) permissions.
pub async fn create_staff(
    access: &str,
    request: &StaffCreateRequest,
) -> Result<StaffMember, AppError> {
    post_json_with_token_response("/api/staff/", request, access).await
}

/// Applies a partial permission or role update.
pub async fn update_staff(
    access: &str,
    id: u64,
    request: &StaffUpdateRequest,
) -> Result<StaffMember, AppError> {
    patch_json_with_token_response(&format!("/api/staff/{id}"), request, access).await
}

/// Removes a staff member.
pub async fn remove_staff(access: &str, id: u64) -> Result<(), AppError> {
    delete_with_token(&format!("/api/staff/{id}"), access).await
}
