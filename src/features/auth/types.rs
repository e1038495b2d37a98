//! Request and response types for identity API calls. Payloads carry
//! credentials in transit, so they must never be logged.

use serde::{Deserialize, Serialize};

/// Cached copy of the account profile owned by the identity service.
/// Mutations happen server-side; the client only replaces this copy by
/// re-fetching after a change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub sector_interests: Vec<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub address: String,
    pub phone_number: String,
    pub sector_interests: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_deserializes_wire_shape() {
        let json = r#"{
            "id": 7,
            "username": "alice",
            "email": "a@b.com",
            "company_name": "Acme",
            "address": "X",
            "phone_number": "+1",
            "sector_interests": ["commerce", "tourism"],
            "is_superuser": true
        }"#;

        let user: UserProfile = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
        assert_eq!(user.sector_interests, vec!["commerce", "tourism"]);
        assert!(user.is_superuser);
    }

    #[test]
    fn user_profile_defaults_optional_fields() {
        let json = r#"{"id": 1, "username": "bob", "email": "b@c.com"}"#;

        let user: UserProfile = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.company_name, "");
        assert!(user.sector_interests.is_empty());
        assert!(!user.is_superuser);
    }
}
