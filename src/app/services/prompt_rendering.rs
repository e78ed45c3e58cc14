//! Prompt rendering from embedded templates.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, ParameterKey, ResolvedParameters};

static PROMPTS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

const PARAMETER_INFERENCE_TEMPLATE: &str = "parameter_inference.j2";
const SCRIPT_TEMPLATE: &str = "script.j2";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Prompt asking the model for a value of `key` suited to `idea`.
pub fn parameter_inference_prompt(idea: &str, key: ParameterKey) -> Result<String, AppError> {
    render(PARAMETER_INFERENCE_TEMPLATE, context! { idea => idea, parameter => key.as_str() })
}

/// Prompt asking the model for the script of video `index` out of `total`.
pub fn script_prompt(
    idea: &str,
    index: u64,
    total: u64,
    params: &ResolvedParameters,
) -> Result<String, AppError> {
    render(
        SCRIPT_TEMPLATE,
        context! {
            idea => idea,
            index => index,
            total => total,
            duration_minutes => params.get(ParameterKey::DurationMinutes).to_string(),
            graphic_type => params.get(ParameterKey::GraphicType).to_string(),
            video_style => params.get(ParameterKey::VideoStyle).to_string(),
            audience => params.get(ParameterKey::Audience).to_string(),
        },
    )
}

fn render(template_name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let source = PROMPTS_DIR
        .get_file(template_name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| render_error(template_name, "template is missing or not UTF-8"))?;

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(source, ctx)
        .map(|rendered| rendered.trim().to_string())
        .map_err(|err| render_error(template_name, err))
}

fn render_error(template_name: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::PromptRender { template: template_name.to_string(), reason: reason.to_string() }
}
