// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig};
use tracing::warn;

/// Malformed JSON bodies are rejected with the standard envelope instead of
/// actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        let message = err.to_string();
        warn!(path = %req.path(), error = %message, "Rejected malformed JSON body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// A path segment that does not parse (for example a malformed UUID) cannot
/// name an existing record, so it is answered like any missing record.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), error = %err, "Rejected malformed path parameter");
        actix_web::error::InternalError::from_response(err, ApiResponse::not_found()).into()
    })
}
