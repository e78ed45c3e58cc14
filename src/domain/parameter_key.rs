use std::fmt;

/// How the oracle's free-text answer for a parameter is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Count or length; the first number in the answer is taken.
    Numeric,
    /// Style or audience; a known vocabulary term is taken.
    Categorical,
}

/// The video-production parameters gathered for every session.
///
/// `ParameterKey::ALL` is the fixed order in which values are resolved, prompted for,
/// and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterKey {
    NumberOfVideos,
    DurationMinutes,
    GraphicType,
    VideoStyle,
    Audience,
}

impl ParameterKey {
    /// All parameters in resolution order.
    pub const ALL: [ParameterKey; 5] = [
        ParameterKey::NumberOfVideos,
        ParameterKey::DurationMinutes,
        ParameterKey::GraphicType,
        ParameterKey::VideoStyle,
        ParameterKey::Audience,
    ];

    /// Wire name used in prompts and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKey::NumberOfVideos => "number_of_videos",
            ParameterKey::DurationMinutes => "duration_minutes",
            ParameterKey::GraphicType => "graphic_type",
            ParameterKey::VideoStyle => "video_style",
            ParameterKey::Audience => "audience",
        }
    }

    /// Question shown to the user when collecting this parameter.
    pub fn prompt(&self) -> &'static str {
        match self {
            ParameterKey::NumberOfVideos => "How many videos would you like?",
            ParameterKey::DurationMinutes => {
                "What should be the duration of each video (in minutes)?"
            }
            ParameterKey::GraphicType => {
                "What graphic style do you prefer? (realistic, animated, imaginative)"
            }
            ParameterKey::VideoStyle => {
                "What is the video style? (animated video, motion pictures, steady pictures)"
            }
            ParameterKey::Audience => {
                "Who is your target audience? (e.g. general, children aged 6, etc.)"
            }
        }
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterKey::NumberOfVideos | ParameterKey::DurationMinutes => ParameterKind::Numeric,
            ParameterKey::GraphicType | ParameterKey::VideoStyle | ParameterKey::Audience => {
                ParameterKind::Categorical
            }
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
