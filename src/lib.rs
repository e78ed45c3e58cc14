//! scenarist: gather video-series parameters and draft one script per video with a
//! hosted language model.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::gemini_http::HttpGeminiOracle;
pub use app::api::{
    GenerateOptions, collect_parameters, collect_with, generate_scenario, generate_with,
    load_config, oracle_from_env,
};
pub use domain::{
    AppConfig, AppError, Conversation, ExplicitParameters, OracleConfig, ParameterKey,
    ParameterValue, ResolvedParameters, ScriptSet, SessionOutput,
};
pub use ports::Oracle;
