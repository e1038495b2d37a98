//! Client helpers for sector-interest endpoints.

use crate::{
    app_lib::{AppError, get_json_with_token, post_json_with_token},
    features::interests::types::{InterestsResponse, UpdateInterestsRequest},
};

/// Fetches the account's current sector selection from the server.
pub async fn fetch_interests(access: &str, user_id: u64) -> Result<Vec<String>, AppError> {
    let response: InterestsResponse =
        get_json_with_token(&format!("/api/users/{user_id}/interests/"), access).await?;
    Ok(response.interests)
}

/// Replaces the account's sector selection. Callers should re-fetch the
/// profile afterwards so the cached copy matches.
pub async fn update_interests(
    access: &str,
    user_id: u64,
    interests: &[String],
) -> Result<(), AppError> {
    let request = UpdateInterestsRequest {
        interests: interests.to_vec(),
    };
    post_json_with_token(&format!("/api/users/{user_id}/interests/"), &request, access).await
}
