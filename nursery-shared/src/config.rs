//! Process configuration.
//!
//! Each tool reads its environment exactly once, in `main`, and hands the
//! resulting structs to the components it builds. A `.env` file in the working
//! directory is loaded first when present.

use serde::Deserialize;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Connection parameters for the application database, from `DB_*` variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// Full connection URL, takes precedence over the individual parts.
    #[serde(default)]
    pub url: Option<String>,
}

fn default_host() -> String { "localhost".into() }
fn default_port() -> u16 { 5432 }
fn default_name() -> String { "nursery".into() }
fn default_user() -> String { "postgres".into() }
fn default_pool_size() -> u32 { 2 }

impl DatabaseConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_env(config::Environment::with_prefix("DB"))
    }

    fn from_env(source: config::Environment) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(source.try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        let auth = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!("postgres://{auth}@{}:{}/{}", self.host, self.port, self.name)
    }

    /// Connection target without credentials, for log lines.
    pub fn redacted_target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.name)
    }
}

/// Location of the running web application, from `API_*` variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String { "http://localhost:3000".into() }

impl ApiConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_env(config::Environment::with_prefix("API"))
    }

    fn from_env(source: config::Environment) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(source)
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Loads `.env` from the working directory if there is one.
///
/// Runs before tracing is installed so the file can set `RUST_LOG`; a file
/// that exists but cannot be read or parsed is returned as an error instead
/// of being logged.
pub fn load_dotenv() -> AppResult<()> {
    settle_dotenv(dotenvy::dotenv().map(|_| ()))
}

fn settle_dotenv(result: Result<(), dotenvy::Error>) -> AppResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(AppError::new(ErrorCode::ConfigInvalid, format!("unreadable .env: {e}"))),
    }
}
