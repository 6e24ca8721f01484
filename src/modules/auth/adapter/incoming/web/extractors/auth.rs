use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::{debug, error, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::OwnershipPolicy;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::api::ApiResponse;

/// The caller's identity, resolved from a bearer access token.
///
/// Requests without a usable token are answered with a redirect to the
/// login route carrying the original path as `next`.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    error!("TokenProvider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let identity = resolve_identity(req, token_provider.get_ref().as_ref());

        ready(
            OwnershipPolicy::authenticate(identity)
                .map(|user_id| AuthenticatedUser { user_id })
                .map_err(|_| create_api_error(ApiResponse::login_redirect(req.path()))),
        )
    }
}

fn resolve_identity(req: &HttpRequest, token_provider: &dyn TokenProvider) -> Option<UserId> {
    let token = extract_token_from_header(req)?;

    match token_provider.verify_token(&token) {
        Ok(claims) if claims.token_type == ACCESS_TOKEN_TYPE => Some(UserId::from(claims.sub)),
        Ok(claims) => {
            warn!(token_type = %claims.token_type, "Rejected non-access token");
            None
        }
        Err(e) => {
            debug!(error = %e, "Rejected bearer token");
            None
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
