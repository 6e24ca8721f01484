use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::AuthenticatedSession;
use crate::shared::validation::{max_chars, required_text, FieldErrors, REQUIRED};

pub const USERNAME_MAX_CHARS: usize = 150;
pub const PASSWORD_MIN_CHARS: usize = 8;

// ========================= Register Command =========================
/// Validated registration input
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    password: String,
}

impl RegisterUserCommand {
    pub fn new(
        username: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = required_text(&mut errors, "username", username);
        max_chars(&mut errors, "username", &username, USERNAME_MAX_CHARS);
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            errors.add(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            );
        }

        if password.is_empty() {
            errors.add("password", REQUIRED);
        } else if password.chars().count() < PASSWORD_MIN_CHARS {
            errors.add(
                "password",
                format!(
                    "This password is too short. It must contain at least {PASSWORD_MIN_CHARS} characters."
                ),
            );
        }

        if password != password_confirmation {
            errors.add(
                "password_confirmation",
                "The two password fields didn't match.",
            );
        }

        errors.into_result(Self {
            username,
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

// ========================= Register Error ===========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Register Use Case ========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthenticatedSession, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthenticatedSession, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(User::new(command.username().to_string(), password_hash))
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterUserError::UsernameTaken,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthenticatedSession {
            user_id: user.id,
            username: user.username,
            access_token,
        })
    }
}
