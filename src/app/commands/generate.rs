use tracing::info;

use crate::app::AppContext;
use crate::app::services::{ParameterCollector, ScriptGenerator};
use crate::domain::{AppError, ExplicitParameters, SessionOutput};
use crate::ports::Oracle;

/// Options for a full generation session.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// The user's idea for the video series.
    pub idea: String,
    /// Values the user filled in; blank ones are inferred.
    pub explicit: ExplicitParameters,
    /// Whether the idea is echoed in the output (form path) or not (terminal path).
    pub include_idea: bool,
}

/// Resolve parameters, then generate every script.
pub fn execute<O: Oracle>(
    ctx: &AppContext<O>,
    options: GenerateOptions,
) -> Result<SessionOutput, AppError> {
    if options.idea.trim().is_empty() {
        return Err(AppError::EmptyIdea);
    }

    let details =
        ParameterCollector::new(ctx.oracle()).resolve(&options.idea, &options.explicit)?;
    let scripts = ScriptGenerator::new(ctx.oracle()).generate(&options.idea, &details)?;
    info!(videos = scripts.len(), "session complete");

    Ok(SessionOutput {
        idea: options.include_idea.then_some(options.idea),
        details,
        scripts: Some(scripts),
    })
}
