//! JSON output file writer.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, SessionOutput};

/// Default file name for saved sessions.
pub const DEFAULT_OUTPUT_FILE: &str = "video_scenario.json";

/// Write the session as pretty JSON, creating parent directories as needed.
pub fn write_session_output(path: &Path, output: &SessionOutput) -> Result<(), AppError> {
    let json = output.to_pretty_json()?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}
