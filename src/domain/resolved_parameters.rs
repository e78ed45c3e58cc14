use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{AppError, ParameterKey, ParameterValue};

/// The finalized parameter set for one session.
///
/// Field order matches `ParameterKey::ALL` so the JSON `details` object lists keys in
/// resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameters {
    number_of_videos: ParameterValue,
    duration_minutes: ParameterValue,
    graphic_type: ParameterValue,
    video_style: ParameterValue,
    audience: ParameterValue,
}

impl ResolvedParameters {
    /// Build from per-key values. Every key must be present.
    pub fn from_values(
        mut values: BTreeMap<ParameterKey, ParameterValue>,
    ) -> Result<Self, AppError> {
        let mut take = |key: ParameterKey| {
            values.remove(&key).ok_or_else(|| AppError::MissingParameter(key.as_str().to_string()))
        };

        Ok(Self {
            number_of_videos: take(ParameterKey::NumberOfVideos)?,
            duration_minutes: take(ParameterKey::DurationMinutes)?,
            graphic_type: take(ParameterKey::GraphicType)?,
            video_style: take(ParameterKey::VideoStyle)?,
            audience: take(ParameterKey::Audience)?,
        })
    }

    pub fn get(&self, key: ParameterKey) -> &ParameterValue {
        match key {
            ParameterKey::NumberOfVideos => &self.number_of_videos,
            ParameterKey::DurationMinutes => &self.duration_minutes,
            ParameterKey::GraphicType => &self.graphic_type,
            ParameterKey::VideoStyle => &self.video_style,
            ParameterKey::Audience => &self.audience,
        }
    }

    /// Number of videos to script, validated as a positive integer.
    pub fn video_count(&self) -> Result<u64, AppError> {
        self.number_of_videos.as_count(ParameterKey::NumberOfVideos)
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, &ParameterValue)> {
        ParameterKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
