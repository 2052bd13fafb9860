//! Login Use Case
//!
//! Authenticates a user and issues a token.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::issue::TokenIssuer;
use crate::application::verify::CredentialVerifier;
use crate::domain::entity::user::UserIdentity;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::error::AuthResult;

/// Login input
pub struct LoginInput {
    /// Email address
    pub email: String,
    /// Password (transient, never persisted or logged)
    pub password: String,
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login output
pub struct LoginOutput {
    /// Signed token for subsequent requests
    pub token: String,
    /// Issuance time
    pub issued_at: DateTime<Utc>,
    /// Token expiry
    pub expires_at: DateTime<Utc>,
    /// Verified email
    pub email: String,
    /// Display name of the verified identity
    pub display_name: String,
}

/// Login use case
///
/// One attempt moves from pending to exactly one terminal outcome:
/// authenticated (token issued) or rejected (no token, no retry). A token
/// exists if and only if verification succeeded.
pub struct LoginUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    verifier: CredentialVerifier<U, C>,
    issuer: Arc<TokenIssuer>,
}

impl<U, C> LoginUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        cred_repo: Arc<C>,
        issuer: Arc<TokenIssuer>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            verifier: CredentialVerifier::new(user_repo, cred_repo, config),
            issuer,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Rejection propagates here; no token is created on that path
        let user = self.verifier.verify(&input.email, &input.password).await?;

        let identity = UserIdentity::from_user(&user);
        let auth_token = self.issuer.issue(&identity)?;

        tracing::info!(
            user_id = %user.user_id,
            expires_at = %auth_token.expires_at,
            "User authenticated"
        );

        Ok(LoginOutput {
            token: auth_token.token,
            issued_at: auth_token.issued_at,
            expires_at: auth_token.expires_at,
            email: identity.email.into_db(),
            display_name: identity.display_name.into_db(),
        })
    }
}
