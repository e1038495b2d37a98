use serde::{Deserialize, Serialize};

/// Staff account belonging to a superuser's organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub owner_user_id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub can_edit: bool,
    pub can_delete: bool,
    pub is_admin: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct StaffCreateRequest {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Partial update; only the fields being changed go on the wire.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StaffUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_serializes_only_set_fields() {
        let request = StaffUpdateRequest {
            can_edit: Some(true),
            ..Default::default()
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(json, r#"{"can_edit":true}"#);
    }

    #[test]
    fn staff_member_round_trips() {
        let json = r#"{
            "id": 11,
            "owner_user_id": 3,
            "name": "Bola",
            "email": "bola@acme.com",
            "role": "Viewer",
            "can_edit": false,
            "can_delete": false,
            "is_admin": false
        }"#;

        let member: StaffMember = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(member.id, 11);
        assert_eq!(member.owner_user_id, 3);
        assert_eq!(member.role, "Viewer");
        assert!(!member.is_admin);
    }
}
