// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldErrors;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Not found")]
    pub message: String,
}

/// Field errors of a rejected form, keyed by field name
#[derive(Serialize, ToSchema)]
pub struct FieldErrorsResponse {
    pub errors: FieldErrors,
}
