use std::str::FromStr;

use anyhow::Context;
use sqlx::postgres::PgSslMode;

/// Upper bound for `JWT_TTL_MINUTES`: one year.
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// `require` encrypts the connection without validating the server certificate.
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let secret = lookup("SECRET_KEY").context("SECRET_KEY must be set")?;

        let ssl_mode = match lookup("DATABASE_SSL_MODE") {
            Some(v) => PgSslMode::from_str(&v)
                .with_context(|| format!("invalid DATABASE_SSL_MODE: {v}"))?,
            None => PgSslMode::Require,
        };

        let database = DatabaseConfig {
            url,
            ssl_mode,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
        };
        let ttl_minutes: i64 = parse_or(&lookup, "JWT_TTL_MINUTES", 60)?;
        if !(1..=MAX_TTL_MINUTES).contains(&ttl_minutes) {
            anyhow::bail!("invalid JWT_TTL_MINUTES: {ttl_minutes} (expected 1..={MAX_TTL_MINUTES})");
        }
        let jwt = JwtConfig {
            secret,
            ttl_minutes,
        };

        Ok(Self {
            database,
            jwt,
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "APP_PORT", 3000)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(v) => v
            .parse::<T>()
            .with_context(|| format!("invalid {key}: {v}")),
        None => Ok(default),
    }
}
