use std::env;
use std::path::PathBuf;

pub const HOST_VAR: &str = "PICKLES_HOST";
pub const PORT_VAR: &str = "PICKLES_PORT";
pub const LOG_VAR: &str = "PICKLES_LOG";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {message}")]
    ParseError { key: String, message: String },

    #[error("Failed to load .env file: {0}")]
    DotenvError(#[from] dotenv::Error),
}

/// Where and how verbosely the server runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `PICKLES_HOST`, `PICKLES_PORT` and `PICKLES_LOG`, falling back to
    /// the defaults for unset or empty variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match var(PORT_VAR) {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::ParseError {
                key: PORT_VAR.to_string(),
                message: e.to_string(),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: var(HOST_VAR).unwrap_or(defaults.host),
            port,
            log_level: var(LOG_VAR).unwrap_or(defaults.log_level),
        })
    }

    /// Loads `.env` from the working directory when there is one, then reads
    /// the environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(_) | Err(dotenv::Error::Io(_)) => {}
            Err(e) => return Err(e.into()),
        }
        Self::from_env()
    }

    /// Load from a specific .env file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        dotenv::from_path(path.into())?;
        Self::from_env()
    }

    /// `host:port`, as handed to the listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
