//! Configuration loading (config.toml plus environment overrides).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{config_file_path, data_dir, try_read_to_string};
use crate::UserId;

pub const API_URL_ENV_VAR: &str = "SUMMER_LEAGUE_API_URL";
pub const TOKEN_ENV_VAR: &str = "SUMMER_LEAGUE_TOKEN";
pub const USER_ID_ENV_VAR: &str = "SUMMER_LEAGUE_USER_ID";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the league REST API, without a trailing slash.
    pub api_url: String,
    /// Bearer credential for the acting scorekeeper.
    pub token: Option<String>,
    /// Backend id of the acting scorekeeper, sent as `scorer`.
    pub user_id: Option<UserId>,
    /// Directory holding `recovery.db`.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_id: None,
            data_dir: data_dir(),
        }
    }
}

impl Config {
    pub fn recovery_db_path(&self) -> PathBuf {
        self.data_dir.join("recovery.db")
    }
}

/// Shape of config.toml; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    token: Option<String>,
    user_id: Option<String>,
    data_dir: Option<PathBuf>,
}

/// Load `~/.config/summer-league/config.toml` (if present) and apply
/// `SUMMER_LEAGUE_*` environment overrides.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_file_path(), |key| std::env::var(key).ok())
}

pub(crate) fn load_config_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let file = match try_read_to_string(path) {
        Some(text) => toml::from_str::<ConfigFile>(&text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => ConfigFile::default(),
    };

    let mut config = Config::default();
    if let Some(url) = file.api_url {
        config.api_url = url;
    }
    config.token = file.token;
    config.user_id = file.user_id.map(UserId::new);
    if let Some(dir) = file.data_dir {
        config.data_dir = dir;
    }

    if let Some(url) = env(API_URL_ENV_VAR) {
        config.api_url = url;
    }
    if let Some(token) = env(TOKEN_ENV_VAR) {
        config.token = Some(token);
    }
    if let Some(user) = env(USER_ID_ENV_VAR) {
        config.user_id = Some(UserId::new(user));
    }

    config.api_url = config.api_url.trim().trim_end_matches('/').to_string();
    config.token = config.token.filter(|t| !t.trim().is_empty());

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if !(config.api_url.starts_with("http://") || config.api_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError {
            field: "api_url".into(),
            message: format!("must be an http(s) URL, got `{}`", config.api_url),
        });
    }
    Ok(())
}
