// src/shared/api/response.rs
use actix_web::{http::header, http::StatusCode, HttpResponse};
use serde::Serialize;

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    /// A submitted form that failed validation is shown again with a
    /// success status; `data` carries the form and its field errors.
    pub fn invalid(data: T) -> HttpResponse {
        Self::invalid_with_status(StatusCode::OK, data)
    }

    /// Field errors for JSON endpoints that are not form pages.
    pub fn invalid_with_status(status: StatusCode, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            data: Some(data),
            error: Some(ApiError::new(
                "VALIDATION_FAILED",
                "The submitted form contains errors",
            )),
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError::new(code, message)),
        })
    }

    /// 303 after a processed submission.
    pub fn see_other(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    pub fn login_redirect(next: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("{LOGIN_PATH}?next={next}")))
            .json(ApiResponse::<()> {
                success: false,
                data: None,
                error: Some(ApiError::new(
                    "AUTHENTICATION_REQUIRED",
                    "Log in to access this page",
                )),
            })
    }

    /// Same response for a missing record and one owned by someone else.
    pub fn not_found() -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, "NOT_FOUND", "Not found")
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn method_not_allowed() -> HttpResponse {
        Self::error(
            StatusCode::METHOD_NOT_ALLOWED,
            "METHOD_NOT_ALLOWED",
            "Method not allowed",
        )
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
