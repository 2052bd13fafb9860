//! Token Issuance
//!
//! Produces signed, time-bounded JWTs for verified identities.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::UserIdentity;
use crate::error::{AuthError, AuthResult};

/// Minimum signing secret length in bytes (HS256 key material)
pub const MIN_SIGNING_SECRET_LEN: usize = 32;

/// Claims encoded into every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the verified email address
    pub sub: String,
    /// Display name of the identity
    pub name: String,
    /// Issuer of the token
    pub iss: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Signed authentication token
///
/// Immutable once created; consumed by the caller.
#[derive(Debug, Clone)]
pub struct AuthToken {
    /// Compact JWT (header.claims.signature)
    pub token: String,
    /// Issuance time
    pub issued_at: DateTime<Utc>,
    /// Expiry time, strictly after `issued_at`
    pub expires_at: DateTime<Utc>,
}

/// Token issuer
///
/// Holds the encoding key for the process lifetime. Constructed once at
/// startup; a misconfigured key fails here, never per request.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    issuer: String,
    ttl: Duration,
}

impl TokenIssuer {
    /// Build an issuer from configuration
    ///
    /// Fails with `SigningKey` if the secret is shorter than
    /// [`MIN_SIGNING_SECRET_LEN`] or the TTL is not positive. Callers should
    /// treat this as fatal and refuse to serve login traffic.
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        if config.signing_secret.len() < MIN_SIGNING_SECRET_LEN {
            return Err(AuthError::SigningKey(format!(
                "signing secret must be at least {} bytes (got {})",
                MIN_SIGNING_SECRET_LEN,
                config.signing_secret.len()
            )));
        }

        let ttl = Duration::from_std(config.token_ttl)
            .map_err(|e| AuthError::SigningKey(format!("invalid token TTL: {}", e)))?;

        if ttl <= Duration::zero() {
            return Err(AuthError::SigningKey(
                "token TTL must be positive".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&config.signing_secret),
            header: Header::new(Algorithm::HS256),
            issuer: config.token_issuer.clone(),
            ttl,
        })
    }

    /// Issue a token for a verified identity
    ///
    /// The token encodes the identity's email and an expiry a fixed lifetime
    /// from issuance.
    pub fn issue(&self, identity: &UserIdentity) -> AuthResult<AuthToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: identity.email.as_str().to_owned(),
            name: identity.display_name.as_str().to_owned(),
            iss: self.issuer.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningKey(e.to_string()))?;

        Ok(AuthToken {
            token,
            issued_at,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{display_name::DisplayName, email::Email};
    use jsonwebtoken::{DecodingKey, Validation, decode};

    fn identity() -> UserIdentity {
        UserIdentity {
            email: Email::new("user@example.com").unwrap(),
            display_name: DisplayName::new("Ada").unwrap(),
        }
    }

    #[test]
    fn test_rejects_short_secret() {
        let config = AuthConfig {
            signing_secret: vec![0u8; 16],
            ..Default::default()
        };
        let result = TokenIssuer::new(&config);
        assert!(matches!(result, Err(AuthError::SigningKey(_))));
    }

    #[test]
    fn test_rejects_missing_secret() {
        let result = TokenIssuer::new(&AuthConfig::default());
        assert!(matches!(result, Err(AuthError::SigningKey(_))));
    }

    #[test]
    fn test_rejects_zero_ttl() {
        let config = AuthConfig {
            token_ttl: std::time::Duration::ZERO,
            ..AuthConfig::with_random_secret()
        };
        let result = TokenIssuer::new(&config);
        assert!(matches!(result, Err(AuthError::SigningKey(_))));
    }

    #[test]
    fn test_issued_token_roundtrip() {
        let config = AuthConfig::with_random_secret();
        let issuer = TokenIssuer::new(&config).unwrap();

        let auth_token = issuer.issue(&identity()).unwrap();
        assert!(!auth_token.token.is_empty());

        let decoded = decode::<Claims>(
            &auth_token.token,
            &DecodingKey::from_secret(&config.signing_secret),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, "user@example.com");
        assert_eq!(decoded.claims.name, "Ada");
        assert_eq!(decoded.claims.iss, config.token_issuer);
        assert!(decoded.claims.exp > decoded.claims.iat);
    }

    #[test]
    fn test_expiry_strictly_after_issuance() {
        let config = AuthConfig::with_random_secret();
        let issuer = TokenIssuer::new(&config).unwrap();

        let auth_token = issuer.issue(&identity()).unwrap();
        assert!(auth_token.expires_at > auth_token.issued_at);
        assert_eq!(
            (auth_token.expires_at - auth_token.issued_at).num_seconds(),
            3600
        );
    }

    #[test]
    fn test_wrong_key_fails_validation() {
        let config = AuthConfig::with_random_secret();
        let issuer = TokenIssuer::new(&config).unwrap();
        let auth_token = issuer.issue(&identity()).unwrap();

        let other = AuthConfig::with_random_secret();
        let result = decode::<Claims>(
            &auth_token.token,
            &DecodingKey::from_secret(&other.signing_secret),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
