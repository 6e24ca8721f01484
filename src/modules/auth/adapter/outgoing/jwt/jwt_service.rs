use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(user_id, ACCESS_TOKEN_TYPE, self.config.access_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::MalformedToken
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::test_jwt_config;

    #[test]
    fn access_token_round_trips_subject_and_type() {
        let service = JwtTokenService::new(test_jwt_config());
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, ACCESS_TOKEN_TYPE);
        assert_eq!(claims.iss, "blog_qa_test");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_token_is_malformed() {
        let service = JwtTokenService::new(test_jwt_config());
        let result = service.verify_token("not.a.jwt");
        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let service = JwtTokenService::new(test_jwt_config());
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "another_secret_key_that_is_long_enough".to_string(),
            ..test_jwt_config()
        });

        let token = other.generate_access_token(Uuid::new_v4()).unwrap();
        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn token_from_another_issuer_is_rejected() {
        let service = JwtTokenService::new(test_jwt_config());
        let other = JwtTokenService::new(JwtConfig {
            issuer: "someone_else".to_string(),
            ..test_jwt_config()
        });

        let token = other.generate_access_token(Uuid::new_v4()).unwrap();
        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let service = JwtTokenService::new(JwtConfig {
            access_token_expiry: -35, // past the 30s leeway
            ..test_jwt_config()
        });

        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }
}
