use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("{0}")]
    Constraint(&'static str),
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`. Missing files are not an error.
pub fn load_dotenv() -> String {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
    env
}

/// Reads a required variable through `lookup`.
pub(crate) fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or(ConfigError::Missing(key))
}

/// Reads and parses an optional variable, using `default` when unset.
pub(crate) fn parsed_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        // Small VPS friendly: 4MB memory, 3 iterations, 1 lane
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub auto_migrate: bool,
    pub password_hash: PasswordHashConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PasswordHashConfig::default();

        let config = Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed_or(&lookup, "PORT", 8080)?,
            database_url: required(&lookup, "DATABASE_URL")?,
            db_max_connections: parsed_or(&lookup, "DB_MAX_CONNECTIONS", 20)?,
            db_min_connections: parsed_or(&lookup, "DB_MIN_CONNECTIONS", 2)?,
            auto_migrate: parsed_or(&lookup, "AUTO_MIGRATE", false)?,
            password_hash: PasswordHashConfig {
                memory_kib: parsed_or(&lookup, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
                iterations: parsed_or(&lookup, "ARGON2_ITERATIONS", defaults.iterations)?,
                parallelism: parsed_or(&lookup, "ARGON2_PARALLELISM", defaults.parallelism)?,
            },
        };

        if config.db_min_connections > config.db_max_connections {
            return Err(ConfigError::Constraint(
                "DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS",
            ));
        }

        Ok(config)
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
