pub mod configuration;
mod conversation;
mod error;
mod explicit_parameters;
pub mod normalization;
mod parameter_key;
mod parameter_value;
mod resolved_parameters;
mod script_set;
mod session_output;

pub use configuration::{AppConfig, OracleConfig};
pub use conversation::{Conversation, Role, Turn};
pub use error::AppError;
pub use explicit_parameters::ExplicitParameters;
pub use parameter_key::{ParameterKey, ParameterKind};
pub use parameter_value::ParameterValue;
pub use resolved_parameters::ResolvedParameters;
pub use script_set::ScriptSet;
pub use session_output::SessionOutput;
