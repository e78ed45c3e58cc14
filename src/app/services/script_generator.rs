use tracing::{debug, info};

use crate::app::services::prompt_rendering::script_prompt;
use crate::domain::{AppError, Conversation, ResolvedParameters, ScriptSet};
use crate::ports::Oracle;

/// Requests one script per video, in order, on a single conversation.
pub struct ScriptGenerator<'a, O: Oracle> {
    oracle: &'a O,
}

impl<'a, O: Oracle> ScriptGenerator<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Generate `Video 1..=N` scripts.
    ///
    /// The video count is validated before any request is made. Each prompt is sent
    /// with the previous videos' prompts and scripts in the conversation, so the model
    /// can keep the series coherent. Any failed request aborts the whole pass.
    pub fn generate(&self, idea: &str, params: &ResolvedParameters) -> Result<ScriptSet, AppError> {
        let total = params.video_count()?;
        let mut conversation = Conversation::new();
        let mut scripts = ScriptSet::new();

        info!(total, "generating scripts");
        for index in 1..=total {
            let prompt = script_prompt(idea, index, total, params)?;
            debug!(index, history = conversation.len(), "requesting script");

            let response = self.oracle.send(&mut conversation, &prompt)?;
            scripts.push(index, response.trim().to_string());
        }

        Ok(scripts)
    }
}
