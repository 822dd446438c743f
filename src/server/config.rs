//! Environment-backed application configuration.

use crate::server::error::config::ConfigError;

static DEFAULT_STORAGE_PATH: &str = "storage/app/public";
static DEFAULT_MAIL_FROM: &str = "Hireboard <no-reply@localhost>";
const DEFAULT_PASSWORD_HASH_ITERATIONS: u32 = 600_000;
const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_LOGIN_DECAY_SECONDS: u64 = 60;

pub struct Config {
    pub app_url: String,
    pub database_url: String,
    pub valkey_url: String,
    pub storage_path: String,
    pub mail_from: String,
    /// SMTP connection URL, mail is written to the log when unset
    pub smtp_url: Option<String>,
    pub password_hash_iterations: u32,
    pub login_max_attempts: u32,
    pub login_decay_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            storage_path: optional("STORAGE_PATH")
                .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string()),
            mail_from: optional("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            smtp_url: optional("SMTP_URL"),
            password_hash_iterations: parsed(
                "PASSWORD_HASH_ITERATIONS",
                DEFAULT_PASSWORD_HASH_ITERATIONS,
            )?,
            login_max_attempts: parsed("LOGIN_MAX_ATTEMPTS", DEFAULT_LOGIN_MAX_ATTEMPTS)?,
            login_decay_seconds: parsed("LOGIN_DECAY_SECONDS", DEFAULT_LOGIN_DECAY_SECONDS)?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional(var) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
