use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, ExplicitParameters, ParameterKey};

/// Ask for the video idea. `None` when the user interrupts.
pub(super) fn prompt_idea() -> Result<Option<String>, AppError> {
    read_line(Input::new().with_prompt("🧠 What's your idea for the video(s)?"), "idea")
}

/// Ask for every parameter in order. Empty answers are left for the model to decide.
pub(super) fn prompt_parameters() -> Result<Option<ExplicitParameters>, AppError> {
    eprintln!("Press Enter to skip a question and let the AI decide.");

    let mut explicit = ExplicitParameters::new();
    for key in ParameterKey::ALL {
        let input = Input::new().with_prompt(key.prompt()).allow_empty(true);
        let Some(value) = read_line(input, key.as_str())? else {
            return Ok(None);
        };
        explicit.set(key, Some(value));
    }
    Ok(Some(explicit))
}

fn read_line(input: Input<'_, String>, what: &str) -> Result<Option<String>, AppError> {
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Input(format!("Failed to read {}: {}", what, err))),
    }
}
