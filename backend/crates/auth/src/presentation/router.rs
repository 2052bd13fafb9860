//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::issue::TokenIssuer;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::infra::postgres::PgUserStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL user store
pub fn auth_router(repo: PgUserStore, issuer: TokenIssuer, config: AuthConfig) -> Router {
    auth_router_generic(repo, issuer, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, issuer: TokenIssuer, config: AuthConfig) -> Router
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        issuer: Arc::new(issuer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
