use crate::app::AppContext;
use crate::app::services::ParameterCollector;
use crate::domain::{AppError, ExplicitParameters, SessionOutput};
use crate::ports::Oracle;

/// Resolve parameters only; no scripts are requested.
pub fn execute<O: Oracle>(
    ctx: &AppContext<O>,
    idea: &str,
    explicit: &ExplicitParameters,
) -> Result<SessionOutput, AppError> {
    if idea.trim().is_empty() {
        return Err(AppError::EmptyIdea);
    }

    let details = ParameterCollector::new(ctx.oracle()).resolve(idea, explicit)?;
    Ok(SessionOutput { idea: None, details, scripts: None })
}
