//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, TokenIssuer};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub issuer: Arc<TokenIssuer>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.issuer.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        expires_at: output.expires_at,
        email: output.email,
        display_name: output.display_name,
    }))
}
