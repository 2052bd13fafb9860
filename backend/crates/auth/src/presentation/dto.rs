//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub email: String,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_debug_redacts_password() {
        let req = LoginRequest {
            email: "a@b.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug_output = format!("{:?}", req);
        assert!(debug_output.contains("a@b.com"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_login_request_camel_case() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"secret"}"#).unwrap();
        assert_eq!(req.email, "a@b.com");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn test_login_response_camel_case() {
        let resp = LoginResponse {
            token: "t".to_string(),
            expires_at: Utc::now(),
            email: "a@b.com".to_string(),
            display_name: "Ada".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"expiresAt\""));
        assert!(json.contains("\"displayName\""));
    }
}
