//! Transport-level failures for calls against the BisFlow API. Every HTTP
//! helper funnels into this type; feature modules translate it into their own
//! taxonomy before anything reaches the UI.

use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    /// Client-side configuration is unusable (missing or broken base URL).
    Config(String),
    /// The request never reached the server.
    Network(String),
    /// The client-side abort timer fired before a response arrived.
    Timeout(String),
    /// The server answered with a non-success status; `message` carries the
    /// sanitized response body.
    Http { status: u16, message: String },
    /// The response body did not decode into the expected shape.
    Parse(String),
    /// The request body could not be encoded or the request not assembled.
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http { status, message } => {
                write!(f, "Request failed ({status}): {message}")
            }
            AppError::Config(detail) => write!(f, "Configuration error: {detail}"),
            AppError::Network(detail) => write!(f, "Network error: {detail}"),
            AppError::Timeout(detail) => write!(f, "Timed out: {detail}"),
            AppError::Parse(detail) => write!(f, "Response error: {detail}"),
            AppError::Serialization(detail) => write!(f, "Request error: {detail}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_status_for_http_errors() {
        let err = AppError::Http {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (503): maintenance");
    }

    #[test]
    fn display_labels_transport_failures() {
        assert_eq!(
            AppError::Timeout("no response".to_string()).to_string(),
            "Timed out: no response"
        );
        assert_eq!(
            AppError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
