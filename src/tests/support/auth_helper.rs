use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

use super::stubs::StubTokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "blog_qa_test".to_string(),
        access_token_expiry: 3600,
    }
}

/// `Authorization` header accepted by [`StubTokenProvider`] as `user`.
pub fn bearer_for(user: UserId) -> (&'static str, String) {
    ("Authorization", format!("Bearer token-{}", user))
}

/// Valid token of the wrong type.
pub fn refresh_bearer_for(user: UserId) -> (&'static str, String) {
    ("Authorization", format!("Bearer refresh-{}", user))
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider);
    web::Data::new(provider)
}
