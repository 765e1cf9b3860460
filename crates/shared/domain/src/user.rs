//! User registry records and the payloads that create them.

use serde::{Deserialize, Serialize};

/// A user held in the in-memory registry.
///
/// The password is stored verbatim; this system performs no credential
/// handling of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRecord {
    /// Registry-assigned identifier, starting at 1
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// Build the stored record for `new` under the given id.
    pub fn from_new(id: u64, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            email: new.email,
            password: new.password,
        }
    }
}

/// User creation payload.
///
/// Every field is optional on the wire and defaults to an empty string;
/// an `id` supplied by the caller is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Plain `{message}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_missing_fields_default_to_empty() {
        let new: NewUser = serde_json::from_str(r#"{"username":"a"}"#).unwrap();
        assert_eq!(new.username, "a");
        assert!(new.email.is_empty());
        assert!(new.password.is_empty());
    }

    #[test]
    fn test_new_user_ignores_client_id() {
        let new: NewUser = serde_json::from_str(r#"{"id":42,"username":"a"}"#).unwrap();
        let record = UserRecord::from_new(1, new);
        assert_eq!(record.id, 1);
    }

    #[test]
    fn test_user_record_wire_shape() {
        let record = UserRecord {
            id: 1,
            username: "a".to_string(),
            email: "a@x".to_string(),
            password: "p".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "a", "email": "a@x", "password": "p"})
        );
    }
}
