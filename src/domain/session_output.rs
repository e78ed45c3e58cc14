use std::io;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::{AppError, ResolvedParameters, ScriptSet};

/// Everything a session produced, in its persisted JSON shape.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutput {
    /// Present on the form path, omitted on the terminal path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea: Option<String>,
    pub details: ResolvedParameters,
    /// Omitted when only parameters were collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<ScriptSet>,
}

impl SessionOutput {
    /// Pretty JSON with four-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(|e| {
            AppError::Serialization(serde_json::Error::io(io::Error::new(
                io::ErrorKind::InvalidData,
                e,
            )))
        })
    }
}
