mod login_user;
mod register_user;

pub use login_user::*;
pub use register_user::*;

use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::use_cases::AuthenticatedSession;

/// Identity and bearer token handed out by register and login
#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,

    #[schema(example = "alice")]
    pub username: String,

    /// JWT access token, sent back as `Authorization: Bearer <token>`
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}

impl From<AuthenticatedSession> for SessionResponse {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            user_id: session.user_id.to_string(),
            username: session.username,
            access_token: session.access_token,
        }
    }
}
