//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers do not store tokens; the
//! `_with_token` variants attach the bearer token the caller provides.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts JSON without authentication and parses a JSON response.
/// Used for the credential endpoints that establish a session.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches JSON with a bearer token for session-authenticated APIs.
pub async fn get_json_with_token<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let bearer = bearer_value(token);
    let response = send_with_timeout(move |signal| {
        Request::get(&url)
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON with a bearer token and expects an empty response body.
pub async fn post_json_with_token<B: Serialize>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<(), AppError> {
    let url = build_url(path);
    let bearer = bearer_value(token);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts JSON with a bearer token and parses a JSON response.
pub async fn post_json_with_token_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let bearer = bearer_value(token);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Patches JSON with a bearer token and parses a JSON response.
pub async fn patch_json_with_token_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let bearer = bearer_value(token);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::patch(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Deletes a resource with a bearer token and expects an empty response body.
pub async fn delete_with_token(path: &str, token: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let bearer = bearer_value(token);
    let response = send_with_timeout(move |signal| {
        Request::delete(&url)
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("The request took too long. Try again.".to_string())
    } else {
        AppError::Network(format!("Could not reach the BisFlow API: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    Ok(())
}

async fn http_error(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{bearer_value, build_url_with_base, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.bisflow.app/", "/api/users/login/"),
            "https://api.bisflow.app/api/users/login/"
        );
        assert_eq!(
            build_url_with_base("https://api.bisflow.app", "api/staff/"),
            "https://api.bisflow.app/api/staff/"
        );
    }

    #[test]
    fn build_url_without_base_keeps_path() {
        assert_eq!(build_url_with_base("", "/api/users/me/"), "/api/users/me/");
        assert_eq!(build_url_with_base("   ", "/api/staff/"), "/api/staff/");
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("  \n ".to_string()), "Request failed.");
        assert_eq!(sanitize_body(" oops ".to_string()), "oops");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }

    #[test]
    fn bearer_value_formats_header() {
        assert_eq!(bearer_value("abc"), "Bearer abc");
    }
}
