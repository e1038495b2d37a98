//! Client wrappers for the identity API endpoints. These helpers centralize
//! endpoint paths and error classification, keeping auth flows consistent and
//! credential material out of route code. No retries, no caching.

use crate::{
    app_lib::{get_json_with_token, post_json_response, post_json_with_token_response},
    features::auth::{
        errors::{
            AuthError, classify_account_error, classify_login_error, classify_refresh_error,
            classify_signup_error,
        },
        session::Session,
        types::{
            ChangePasswordRequest, LoginRequest, MessageResponse, RefreshRequest, RefreshResponse,
            SignupRequest, UserProfile,
        },
    },
};

/// Registers a new account. The endpoint returns the session tokens together
/// with the created profile, so no follow-up login call is needed.
pub async fn signup(request: &SignupRequest) -> Result<Session, AuthError> {
    post_json_response("/api/users/signup/", request)
        .await
        .map_err(classify_signup_error)
}

/// Exchanges credentials for a session.
pub async fn login(request: &LoginRequest) -> Result<Session, AuthError> {
    post_json_response("/api/users/login/", request)
        .await
        .map_err(classify_login_error)
}

/// Exchanges the refresh token for a new access token. A rejection means the
/// session is gone and the caller must clear the store.
pub async fn refresh(refresh_token: &str) -> Result<String, AuthError> {
    let request = RefreshRequest {
        refresh: refresh_token.to_string(),
    };
    let response: RefreshResponse = post_json_response("/api/users/token/refresh/", &request)
        .await
        .map_err(classify_refresh_error)?;
    Ok(response.access)
}

/// Re-fetches the authenticated user's profile.
pub async fn current_user(access: &str) -> Result<UserProfile, AuthError> {
    get_json_with_token("/api/users/me/", access)
        .await
        .map_err(classify_account_error)
}

/// Changes the account password.
pub async fn change_password(
    access: &str,
    request: &ChangePasswordRequest,
) -> Result<MessageResponse, AuthError> {
    post_json_with_token_response("/api/users/change-password/", request, access)
        .await
        .map_err(classify_account_error)
}
