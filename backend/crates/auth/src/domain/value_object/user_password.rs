//! User Password Value Objects
//!
//! Domain wrappers around `platform::password` for the two shapes a password
//! takes in this crate: the transient clear text submitted at login, and the
//! Argon2id hash held by the user store.
//!
//! ## Security Features
//! - Argon2id hashing (memory-hard)
//! - Automatic memory zeroization of submitted passwords
//! - Constant-time comparison
//! - Unicode NFKC normalization

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Submitted Password (login input)
// ============================================================================

/// Password as submitted in a login attempt
///
/// Transient: exists only for the duration of one verification and is
/// zeroized on drop. Deliberately lenient — enrollment policy must not
/// reject a stored-credential match at login time.
pub struct SubmittedPassword(ClearTextPassword);

impl SubmittedPassword {
    /// Accept a submitted password for verification
    ///
    /// Rejects only empty/whitespace-only input and absurd lengths.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::for_verification(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
            }
            _ => AppError::bad_request("Password is not acceptable"),
        })?;
        Ok(Self(clear_text))
    }

    pub(crate) fn as_clear_text(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for SubmittedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubmittedPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// User Password (stored hash)
// ============================================================================

/// Stored password hash for a user
///
/// Wraps the PHC-formatted Argon2id hash held by the user store.
#[derive(Clone)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Wrap a freshly computed hash
    pub fn new(hash: HashedPassword) -> Self {
        Self(hash)
    }

    /// Create from database value, validating the PHC format
    pub fn from_db(phc: impl Into<String>) -> AppResult<Self> {
        let hash = HashedPassword::from_phc_string(phc)
            .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {}", e)))?;
        Ok(Self(hash))
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a submitted password against this hash
    ///
    /// Comparison happens over the salted hash in constant time; the clear
    /// text is never compared directly.
    pub fn verify(&self, password: &SubmittedPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(password.as_clear_text(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(password: &str) -> UserPassword {
        let clear = ClearTextPassword::for_verification(password.to_string()).unwrap();
        UserPassword::new(clear.hash(None).unwrap())
    }

    #[test]
    fn test_submitted_password_rejects_empty() {
        assert!(SubmittedPassword::new("".to_string()).is_err());
        assert!(SubmittedPassword::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_verify_matching_password() {
        let stored = hash_of("correct");
        let submitted = SubmittedPassword::new("correct".to_string()).unwrap();
        assert!(stored.verify(&submitted, None));
    }

    #[test]
    fn test_verify_wrong_password() {
        let stored = hash_of("correct");
        let submitted = SubmittedPassword::new("wrong".to_string()).unwrap();
        assert!(!stored.verify(&submitted, None));
    }

    #[test]
    fn test_from_db_roundtrip() {
        let stored = hash_of("correct");
        let restored = UserPassword::from_db(stored.as_phc_string()).unwrap();
        let submitted = SubmittedPassword::new("correct".to_string()).unwrap();
        assert!(restored.verify(&submitted, None));
    }

    #[test]
    fn test_from_db_rejects_garbage() {
        assert!(UserPassword::from_db("not-a-phc-string").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let submitted = SubmittedPassword::new("secret".to_string()).unwrap();
        let debug_output = format!("{:?}", submitted);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
