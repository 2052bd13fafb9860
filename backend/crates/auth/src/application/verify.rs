//! Credential Verification
//!
//! Checks a login attempt against the user store.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::SubmittedPassword};
use crate::error::{AuthError, AuthResult};

/// Credential verifier
///
/// Leaf component: one user lookup, one credential lookup, one hash
/// comparison. No side effects beyond the lookups.
pub struct CredentialVerifier<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    cred_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> CredentialVerifier<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(user_repo: Arc<U>, cred_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            cred_repo,
            config,
        }
    }

    /// Verify a submitted email/password pair
    ///
    /// Returns the matching user on success. Malformed email, unknown email,
    /// missing credential, and wrong password all fail with the same
    /// `InvalidCredentials` so the caller cannot probe for account existence.
    pub async fn verify(&self, email: &str, password: &str) -> AuthResult<User> {
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let submitted = SubmittedPassword::new(password.to_owned())
            .map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credential = self
            .cred_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Salted-hash comparison in constant time; never plaintext
        if !credential
            .password_hash
            .verify(&submitted, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}
