use std::env;

use crate::shared::config::{parsed_or, required, ConfigError};

/// HS256 needs at least 32 bytes of key material.
const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(&lookup, "JWT_SECRET")?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Constraint(
                "JWT_SECRET must be at least 32 characters long for HS256 algorithm",
            ));
        }

        let access_token_expiry = parsed_or(&lookup, "JWT_ACCESS_EXPIRY", 3600_i64)?;
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Constraint(
                "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)",
            ));
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "blog_qa".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn defaults_expiry_and_issuer() {
        let config = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some(SECRET.to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.issuer, "blog_qa");
    }

    #[test]
    fn rejects_missing_or_short_secret() {
        assert_eq!(
            JwtConfig::from_lookup(|_| None).unwrap_err(),
            ConfigError::Missing("JWT_SECRET")
        );

        let err = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("short".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Constraint(_)));
    }

    #[test]
    fn rejects_out_of_range_expiry() {
        let err = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some(SECRET.to_string()),
            "JWT_ACCESS_EXPIRY" => Some("0".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::Constraint(_)));
    }
}
