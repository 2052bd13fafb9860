//! Credential Entity
//!
//! Stored login credential for a user.
//! Separated from the User entity to isolate sensitive data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Credential entity
///
/// Holds the Argon2id password hash referenced by user ID.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Reference to User
    pub user_id: UserId,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
