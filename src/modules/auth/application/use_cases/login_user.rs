use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::use_cases::AuthenticatedSession;
use crate::shared::validation::{FieldErrors, REQUIRED};

// ========================= Login Command =========================
#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

impl LoginCommand {
    pub fn new(username: &str, password: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = username.trim();
        if username.is_empty() {
            errors.add("username", REQUIRED);
        }
        if password.is_empty() {
            errors.add("password", REQUIRED);
        }

        errors.into_result(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Error ===========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ========================= Login Use Case ========================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthenticatedSession, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthenticatedSession, LoginError> {
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthenticatedSession {
            user_id: user.id,
            username: user.username,
            access_token,
        })
    }
}
