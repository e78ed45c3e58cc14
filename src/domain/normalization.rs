//! Normalization of free-text oracle answers into parameter values.
//!
//! Numeric parameters take the first run of digits. Categorical parameters take the
//! earliest vocabulary term found in the answer, capitalized. When nothing matches,
//! the trimmed answer is kept as text; that fallback is intentional.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ParameterKey, ParameterKind, ParameterValue};

/// A vocabulary term recognized in categorical answers.
#[derive(Debug)]
pub struct CategoryRule {
    pub name: &'static str,
    pattern: Regex,
}

impl CategoryRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        // Patterns are static literals below.
        let pattern = Regex::new(&format!("(?i){}", pattern)).expect("category pattern is valid");
        Self { name, pattern }
    }
}

/// Vocabulary rules in priority order. Ties at the same text position go to the rule
/// listed first.
pub static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    vec![
        CategoryRule::new("realistic", "realistic"),
        CategoryRule::new("animated", "animated"),
        CategoryRule::new("imaginative", "imaginative"),
        CategoryRule::new("motion pictures", "motion pictures"),
        CategoryRule::new("steady pictures", "steady pictures"),
        CategoryRule::new("animated video", "animated video"),
        CategoryRule::new("general", "general"),
        CategoryRule::new("children", "children.*"),
    ]
});

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("number pattern is valid"));

/// Normalize an oracle answer for `key`.
pub fn normalize(key: ParameterKey, response: &str) -> ParameterValue {
    let text = response.trim();
    match key.kind() {
        ParameterKind::Numeric => extract_number(text),
        ParameterKind::Categorical => extract_category(text),
    }
}

/// First integer in `text`, or the text itself when there is none.
pub fn extract_number(text: &str) -> ParameterValue {
    FIRST_NUMBER
        .find(text)
        .and_then(|found| found.as_str().parse::<u64>().ok())
        .map(ParameterValue::Integer)
        .unwrap_or_else(|| ParameterValue::text(text))
}

/// Earliest vocabulary match in `text`, capitalized, or the text itself.
pub fn extract_category(text: &str) -> ParameterValue {
    let mut best: Option<regex::Match<'_>> = None;
    for rule in CATEGORY_RULES.iter() {
        if let Some(found) = rule.pattern.find(text)
            && best.is_none_or(|current| found.start() < current.start())
        {
            best = Some(found);
        }
    }

    match best {
        Some(found) => ParameterValue::Text(capitalize(found.as_str())),
        None => ParameterValue::text(text),
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
