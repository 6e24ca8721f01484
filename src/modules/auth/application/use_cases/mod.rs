pub mod login_user;
pub mod register_user;

use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

/// Returned by both register and login; registering logs the new user in.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedSession {
    pub user_id: UserId,
    pub username: String,
    pub access_token: String,
}
