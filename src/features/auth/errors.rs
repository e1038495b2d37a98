//! Domain error taxonomy for authentication flows, layered over the transport
//! [`AppError`]. Classification is pure so the status/body mapping rules are
//! covered by native unit tests.

use crate::app_lib::AppError;
use std::collections::BTreeMap;
use std::fmt;

/// One server-reported problem with a submitted field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthError {
    /// Bad input the user can correct; carries server field detail.
    Validation(Vec<FieldError>),
    /// Login rejected by the identity service.
    InvalidCredentials,
    /// Refresh token rejected; the session must be discarded.
    SessionExpired,
    /// Network or server failure. Retryable by user action only.
    Service(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(fields) if fields.is_empty() => {
                write!(formatter, "Some fields were rejected by the server.")
            }
            AuthError::Validation(fields) => {
                let detail = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(formatter, "{detail}")
            }
            AuthError::InvalidCredentials => {
                write!(formatter, "Invalid username or password.")
            }
            AuthError::SessionExpired => {
                write!(formatter, "Your session has expired. Please sign in again.")
            }
            AuthError::Service(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Maps a login failure. The identity service answers bad credentials with
/// 400 or 401 depending on the serializer path.
pub fn classify_login_error(err: AppError) -> AuthError {
    match err {
        AppError::Http {
            status: 400 | 401, ..
        } => AuthError::InvalidCredentials,
        other => AuthError::Service(other.to_string()),
    }
}

/// Maps a signup failure. A 400 body shaped like a field→messages map becomes
/// field-level validation detail; anything else is a service failure.
pub fn classify_signup_error(err: AppError) -> AuthError {
    if let AppError::Http {
        status: 400,
        message,
    } = &err
    {
        if let Some(fields) = parse_field_errors(message) {
            return AuthError::Validation(fields);
        }
    }
    AuthError::Service(err.to_string())
}

/// Maps a token-refresh failure. Any 4xx is a server-side rejection of the
/// refresh token; transport and 5xx failures leave the session usable.
pub fn classify_refresh_error(err: AppError) -> AuthError {
    match err {
        AppError::Http { status, .. } if (400..500).contains(&status) => AuthError::SessionExpired,
        other => AuthError::Service(other.to_string()),
    }
}

/// Maps failures of bearer-authenticated account calls. A 401 means the
/// access token no longer works; a 400 may carry field detail.
pub fn classify_account_error(err: AppError) -> AuthError {
    if let AppError::Http { status, message } = &err {
        if *status == 401 {
            return AuthError::SessionExpired;
        }
        if *status == 400 {
            if let Some(fields) = parse_field_errors(message) {
                return AuthError::Validation(fields);
            }
        }
    }
    AuthError::Service(err.to_string())
}

/// Parses a `{"field": ["message", ...]}` or `{"field": "message"}` body into
/// field errors, keeping the first message per field. Returns `None` when the
/// body is not such a map.
fn parse_field_errors(body: &str) -> Option<Vec<FieldError>> {
    let map: BTreeMap<String, serde_json::Value> = serde_json::from_str(body).ok()?;
    let mut fields = Vec::new();
    for (field, value) in map {
        let message = match value {
            serde_json::Value::String(message) => message,
            serde_json::Value::Array(items) => {
                match items.into_iter().find_map(|item| match item {
                    serde_json::Value::String(message) => Some(message),
                    _ => None,
                }) {
                    Some(message) => message,
                    None => continue,
                }
            }
            _ => continue,
        };
        fields.push(FieldError { field, message });
    }
    (!fields.is_empty()).then_some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: &str) -> AppError {
        AppError::Http {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn login_rejection_is_invalid_credentials() {
        assert_eq!(
            classify_login_error(http(401, "no")),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            classify_login_error(http(400, "no")),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn login_server_failure_is_service_error() {
        let classified = classify_login_error(http(500, "boom"));
        assert!(matches!(classified, AuthError::Service(_)));

        let classified = classify_login_error(AppError::Network("down".to_string()));
        assert!(matches!(classified, AuthError::Service(_)));
    }

    #[test]
    fn signup_field_map_becomes_validation() {
        let body = r#"{"username": ["already taken"], "email": "invalid"}"#;
        let classified = classify_signup_error(http(400, body));

        let AuthError::Validation(fields) = classified else {
            panic!("expected validation error");
        };
        assert_eq!(
            fields,
            vec![
                FieldError {
                    field: "email".to_string(),
                    message: "invalid".to_string(),
                },
                FieldError {
                    field: "username".to_string(),
                    message: "already taken".to_string(),
                },
            ]
        );
    }

    #[test]
    fn signup_unparseable_body_is_service_error() {
        assert!(matches!(
            classify_signup_error(http(400, "<html>bad gateway</html>")),
            AuthError::Service(_)
        ));
    }

    #[test]
    fn refresh_rejection_expires_session() {
        assert_eq!(
            classify_refresh_error(http(401, "token invalid")),
            AuthError::SessionExpired
        );
        assert_eq!(
            classify_refresh_error(http(400, "token blacklisted")),
            AuthError::SessionExpired
        );
    }

    #[test]
    fn refresh_transport_failure_keeps_session() {
        assert!(matches!(
            classify_refresh_error(AppError::Timeout("slow".to_string())),
            AuthError::Service(_)
        ));
        assert!(matches!(
            classify_refresh_error(http(503, "maintenance")),
            AuthError::Service(_)
        ));
    }

    #[test]
    fn account_call_401_expires_session() {
        assert_eq!(
            classify_account_error(http(401, "stale token")),
            AuthError::SessionExpired
        );
    }

    #[test]
    fn account_call_400_with_fields_is_validation() {
        let body = r#"{"old_password": ["does not match"]}"#;
        assert!(matches!(
            classify_account_error(http(400, body)),
            AuthError::Validation(_)
        ));
    }

    #[test]
    fn field_errors_skip_non_string_entries() {
        let body = r#"{"username": [1, 2], "email": ["invalid"]}"#;
        let fields = parse_field_errors(body).expect("fields");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "email");
    }

    #[test]
    fn display_is_user_readable() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password."
        );
        let validation = AuthError::Validation(vec![FieldError {
            field: "email".to_string(),
            message: "invalid".to_string(),
        }]);
        assert_eq!(validation.to_string(), "email: invalid");
    }
}
