//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for token signing (HS256, at least 32 bytes)
    pub signing_secret: Vec<u8>,
    /// Token lifetime from issuance (1 hour)
    pub token_ttl: Duration,
    /// Value of the token's `iss` claim
    pub token_issuer: String,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            // Empty by default: the issuer refuses to start without a real key
            signing_secret: Vec::new(),
            token_ttl: Duration::from_secs(3600), // 1 hour
            token_issuer: "auth-api".to_string(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            signing_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
