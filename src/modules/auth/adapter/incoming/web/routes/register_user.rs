use actix_web::{http::StatusCode, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, FieldErrorsResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::SessionResponse;

/// Request body for user registration
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Letters, digits and @/./+/-/_ only, at most 150 characters
    #[schema(example = "alice")]
    pub username: String,

    /// At least 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Must repeat `password`
    #[schema(example = "SecurePass123!")]
    pub password_confirmation: String,
}

/// Register a new user
///
/// Creates the account and logs the new user in.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<SessionResponse>)),
        (status = 400, description = "Invalid fields", body = FieldErrorsResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "User registration attempt");

    let command = match RegisterUserCommand::new(
        &dto.username,
        &dto.password,
        &dto.password_confirmation,
    ) {
        Ok(command) => command,
        Err(errors) => {
            warn!(username = %dto.username, "Invalid registration input");
            return ApiResponse::invalid_with_status(
                StatusCode::BAD_REQUEST,
                FieldErrorsResponse { errors },
            );
        }
    };

    match data.register_user_use_case.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user_id, "User registered");
            ApiResponse::created(SessionResponse::from(session))
        }

        Err(RegisterUserError::UsernameTaken) => {
            warn!(username = %dto.username, "Username already taken");
            ApiResponse::conflict("USERNAME_TAKEN", "A user with that username already exists")
        }

        Err(e) => {
            error!(username = %dto.username, error = %e, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}
