use actix_web::{http::StatusCode, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, FieldErrorsResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::SessionResponse;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// User login
///
/// Exchanges username and password for a bearer access token. Protected
/// routes redirect here with the original path in `next`.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Logged in", body = inline(SuccessResponse<SessionResponse>)),
        (status = 400, description = "Missing fields", body = FieldErrorsResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let command = match LoginCommand::new(&dto.username, &dto.password) {
        Ok(command) => command,
        Err(errors) => {
            return ApiResponse::invalid_with_status(
                StatusCode::BAD_REQUEST,
                FieldErrorsResponse { errors },
            );
        }
    };

    match data.login_user_use_case.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user_id, "User logged in successfully");
            ApiResponse::success(SessionResponse::from(session))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(username = %dto.username, "Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(e) => {
            error!(username = %dto.username, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
