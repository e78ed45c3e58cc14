//! Configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppConfig, AppError};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "scenarist.toml";

/// Load configuration.
///
/// An explicit path must exist. Without one, `scenarist.toml` in `dir` is used if
/// present, otherwise built-in defaults apply.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => Some(dir.join(DEFAULT_CONFIG_FILE)).filter(|candidate| candidate.exists()),
    };

    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            parse_config_content(&fs::read_to_string(&path)?)?
        }
        None => AppConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Parse and validate TOML config content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load `.env` from the working directory, if any, without overriding variables that
/// are already set.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("ignoring unreadable .env file: {}", err),
    }
}
