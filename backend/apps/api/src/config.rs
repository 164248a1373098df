//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded) with a default for
//! every variable, so the server starts with no configuration at all.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/tacboard_db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    /// False when `DATABASE_URL` was unset and the default is used
    pub database_url_from_env: bool,
    pub max_connections: u32,
    pub port: u16,
    /// Directory served for every path outside the API
    pub static_dir: PathBuf,
    /// Explicit CORS origins; empty means any origin
    pub frontend_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_url_from_env: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            frontend_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable numbers fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL");
        let database_url_from_env = database_url.is_some();

        Self {
            database_url: database_url.unwrap_or(defaults.database_url),
            database_url_from_env,
            max_connections: non_empty("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            port: non_empty("PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            frontend_origins: non_empty("FRONTEND_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
