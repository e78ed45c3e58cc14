use std::io;

use thiserror::Error;

/// Library-wide error type for scenarist operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// API credential not present in the environment.
    #[error("Missing API credential: {env_var} environment variable is not set")]
    MissingCredential { env_var: String },

    /// The oracle request could not be sent or its body could not be read.
    #[error("Oracle request failed: {0}")]
    OracleRequest(String),

    /// The oracle answered with a non-success HTTP status.
    #[error("Oracle returned HTTP {status}: {body}")]
    OracleStatus { status: u16, body: String },

    /// The oracle answered, but without usable text.
    #[error("Malformed oracle response: {0}")]
    MalformedResponse(String),

    /// A parameter key had no resolved value.
    #[error("Parameter '{0}' was not resolved")]
    MissingParameter(String),

    /// A resolved parameter cannot be used where a number is required.
    #[error("Malformed parameter '{key}': expected an integer, got '{value}'")]
    MalformedParameter { key: String, value: String },

    /// Video count is zero or negative.
    #[error("Invalid video count {0}: must be a positive integer")]
    InvalidVideoCount(i64),

    /// The video idea was empty.
    #[error("Video idea must not be empty")]
    EmptyIdea,

    /// Prompt template rendering failed.
    #[error("Failed to render prompt '{template}': {reason}")]
    PromptRender { template: String, reason: String },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Interactive terminal input failed.
    #[error("Failed to read input: {0}")]
    Input(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the error came from talking to the oracle.
    pub fn is_oracle_failure(&self) -> bool {
        matches!(
            self,
            AppError::OracleRequest(_)
                | AppError::OracleStatus { .. }
                | AppError::MalformedResponse(_)
        )
    }
}
