//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::gemini_http::HttpGeminiOracle;
use crate::app::{
    AppContext,
    commands::{collect, generate},
};
use crate::ports::Oracle;

pub use crate::app::commands::generate::GenerateOptions;
pub use crate::domain::{
    AppConfig, AppError, ExplicitParameters, ParameterKey, ParameterValue, ResolvedParameters,
    ScriptSet, SessionOutput,
};

/// Load configuration for the current directory.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    crate::app::config::load_dotenv();
    crate::app::config::load_config(path, &std::env::current_dir()?)
}

/// Build the HTTP oracle, reading the credential from the environment.
pub fn oracle_from_env(config: &AppConfig) -> Result<HttpGeminiOracle, AppError> {
    HttpGeminiOracle::from_env(&config.oracle)
}

/// Run a full session against the configured model.
pub fn generate_scenario(
    config: &AppConfig,
    options: GenerateOptions,
) -> Result<SessionOutput, AppError> {
    generate_with(oracle_from_env(config)?, options)
}

/// Run a full session against the given oracle.
pub fn generate_with<O: Oracle>(
    oracle: O,
    options: GenerateOptions,
) -> Result<SessionOutput, AppError> {
    generate::execute(&AppContext::new(oracle), options)
}

/// Resolve parameters only, against the configured model.
pub fn collect_parameters(
    config: &AppConfig,
    idea: &str,
    explicit: &ExplicitParameters,
) -> Result<SessionOutput, AppError> {
    collect_with(oracle_from_env(config)?, idea, explicit)
}

/// Resolve parameters only, against the given oracle.
pub fn collect_with<O: Oracle>(
    oracle: O,
    idea: &str,
    explicit: &ExplicitParameters,
) -> Result<SessionOutput, AppError> {
    collect::execute(&AppContext::new(oracle), idea, explicit)
}
