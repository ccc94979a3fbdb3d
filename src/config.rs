// src/config.rs
use std::env;
use thiserror::Error;

use crate::application::{commands::DEFAULT_INSERT_RETRIES, services::SlugSettings};
use crate::domain::slug::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_BASE_LEN, DEFAULT_MAX_FINAL_LEN, SlugPolicy,
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    allowed_origins: Vec<String>,
    slug_settings: SlugSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://quill.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let database_max_connections = parse_or(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;

        let policy = SlugPolicy::new(
            parse_or(&lookup, "SLUG_MAX_BASE_LENGTH", DEFAULT_MAX_BASE_LEN)?,
            parse_or(&lookup, "SLUG_MAX_FINAL_LENGTH", DEFAULT_MAX_FINAL_LEN)?,
            parse_or(&lookup, "SLUG_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
        )
        .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        let insert_retries = parse_or(&lookup, "SLUG_INSERT_RETRIES", DEFAULT_INSERT_RETRIES)?;

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            allowed_origins,
            slug_settings: SlugSettings {
                policy,
                insert_retries,
            },
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn slug_settings(&self) -> SlugSettings {
        self.slug_settings
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer, got {raw:?}"))),
    }
}
