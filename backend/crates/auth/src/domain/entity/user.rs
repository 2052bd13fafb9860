//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId,
};

/// User entity
///
/// Contains public user profile information.
/// The password hash lives in the Credential entity.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email address (unique, used for login)
    pub email: Email,
    /// Name shown alongside the account
    pub display_name: DisplayName,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, display_name: DisplayName) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            display_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Identity summary of a verified user
///
/// Read model handed to the token issuer and returned to the caller.
/// Built by explicit field mapping from the entity - no hidden copying.
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub email: Email,
    pub display_name: DisplayName,
}

impl UserIdentity {
    /// Map a user entity to its identity summary
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            display_name: user.display_name.clone(),
        }
    }
}
