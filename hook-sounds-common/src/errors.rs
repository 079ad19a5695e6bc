//! Error taxonomy for hook-sounds.
//!
//! | Type           | Raised by         | Handling                                  |
//! |----------------|-------------------|-------------------------------------------|
//! | `StartupError` | player, catalog   | Fatal. Printed to stderr, exit code 1.    |
//! | `MergeError`   | settings merger   | Rendered as the session's final state.    |
//!
//! Preview failures never surface as errors; the player logs and drops them.

use std::path::PathBuf;

/// Conditions that stop the configurator before any UI is shown.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("No audio player found (tried: {})", .tried.join(", "))]
    NoAudioPlayer { tried: Vec<String> },

    #[error("Audio player '{name}' was not found on PATH")]
    PlayerNotFound { name: String },

    #[error("No sound suites found in {}", .root.display())]
    NoSuites { root: PathBuf },

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Could not determine the current directory: {source}")]
    NoWorkingDir {
        #[source]
        source: std::io::Error,
    },
}

impl StartupError {
    /// Extra lines printed after the error message to help the user recover.
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            StartupError::NoAudioPlayer { .. } => &[
                "Please install one of the following:",
                "  - macOS: afplay (built-in)",
                "  - Linux: aplay (alsa-utils) or paplay (pulseaudio-utils)",
                "  - Windows: powershell (built-in)",
            ],
            StartupError::PlayerNotFound { .. } => {
                &["Check --player / HOOK_SOUNDS_PLAYER or unset it to auto-detect."]
            }
            StartupError::NoSuites { .. } => &[
                "Run from the directory holding the suites or pass --root <DIR>.",
                "A suite is listed only when its session_start.wav exists.",
            ],
            StartupError::NoHomeDir => &["Pass --settings <FILE> to choose the settings path."],
            StartupError::NoWorkingDir { .. } => {
                &["Pass --root <DIR> to choose the suites directory."]
            }
        }
    }
}

/// Failures while merging generated hooks into the settings file.
///
/// Every variant leaves the canonical settings file untouched, and a backup
/// taken before the failure is never removed.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("failed to create backup of {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse existing settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings {} is not a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("\"hooks\" in {} is {found}, expected an object; refusing to overwrite it", .path.display())]
    HooksNotAnObject { path: PathBuf, found: &'static str },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to create settings directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
