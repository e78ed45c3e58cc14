use std::fmt;

use serde::Serialize;

use crate::domain::{AppError, ParameterKey};

/// A resolved parameter value.
///
/// Numeric parameters become `Integer` when a number could be extracted; every other
/// value (explicit user input, unmatched oracle text) stays `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Integer(u64),
    Text(String),
}

impl ParameterValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParameterValue::Text(value.into())
    }

    /// Interpret this value as a number of videos.
    ///
    /// Text is accepted only if the whole trimmed string is an integer. Zero and
    /// negative counts are rejected.
    pub fn as_count(&self, key: ParameterKey) -> Result<u64, AppError> {
        let count = match self {
            ParameterValue::Integer(value) => i64::try_from(*value).unwrap_or(i64::MAX),
            ParameterValue::Text(text) => {
                text.trim().parse::<i64>().map_err(|_| AppError::MalformedParameter {
                    key: key.as_str().to_string(),
                    value: text.clone(),
                })?
            }
        };

        if count <= 0 {
            return Err(AppError::InvalidVideoCount(count));
        }
        Ok(count as u64)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Integer(value) => write!(f, "{}", value),
            ParameterValue::Text(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: ParameterKey = ParameterKey::NumberOfVideos;

    #[test]
    fn integer_serializes_as_number_and_text_as_string() {
        assert_eq!(serde_json::to_string(&ParameterValue::Integer(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&ParameterValue::text("teens")).unwrap(), "\"teens\"");
    }

    #[test]
    fn count_from_integer() {
        assert_eq!(ParameterValue::Integer(4).as_count(KEY).unwrap(), 4);
    }

    #[test]
    fn count_from_numeric_text() {
        assert_eq!(ParameterValue::text(" 3 ").as_count(KEY).unwrap(), 3);
    }

    #[test]
    fn count_from_prose_is_malformed() {
        let err = ParameterValue::text("a few").as_count(KEY).unwrap_err();
        match err {
            AppError::MalformedParameter { key, value } => {
                assert_eq!(key, "number_of_videos");
                assert_eq!(value, "a few");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_and_negative_counts_are_invalid() {
        assert!(matches!(
            ParameterValue::Integer(0).as_count(KEY),
            Err(AppError::InvalidVideoCount(0))
        ));
        assert!(matches!(
            ParameterValue::text("-2").as_count(KEY),
            Err(AppError::InvalidVideoCount(-2))
        ));
    }
}
