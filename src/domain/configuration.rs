//! Configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `scenarist.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Language model configuration.
    #[serde(default)]
    pub oracle: OracleConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.oracle.validate()
    }
}

/// Hosted language model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OracleConfig {
    /// API base URL; the model path is appended to it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

impl OracleConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("api_key_env must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String, AppError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::MissingCredential { env_var: self.api_key_env.clone() })
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/models/{}:generateContent", base, self.model))
            .map_err(|e| AppError::InvalidConfig(format!("Invalid oracle endpoint: {}", e)))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
