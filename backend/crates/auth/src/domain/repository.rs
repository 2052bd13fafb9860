//! Repository Traits
//!
//! Interfaces for the user-store collaborator. Implementation is in the
//! infrastructure layer; the core only ever reads through these traits.

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by email. At most one user matches a given address.
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the stored credential for a user
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;
}
