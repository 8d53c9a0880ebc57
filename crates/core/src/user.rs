// User domain types
//
// A User is created once at registration and never updated or deleted.
// The password hash stays on the entity but is never serialized.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Registered user with credentials.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// PHC-formatted one-way hash of the user's password.
    pub password_hash: String,
}

impl User {
    /// Public projection, safe to return to clients.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public view of a user returned after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UserProfile {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Display name chosen at registration.
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
    /// Email address used to log in.
    #[cfg_attr(feature = "openapi", schema(example = "a@x.com"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_password_hash() {
        let user = User {
            id: Uuid::now_v7(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$salt$hash".to_string(),
        };

        let json = serde_json::to_value(user.profile()).unwrap();

        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
