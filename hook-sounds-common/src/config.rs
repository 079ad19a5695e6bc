//! Runtime configuration.
//!
//! Built once at startup by the binary (CLI flags and `HOOK_SOUNDS_*`
//! environment variables) and passed down explicitly.

use crate::errors::StartupError;
use std::path::PathBuf;
use std::time::Duration;

/// Settings file location relative to the home directory.
pub const SETTINGS_RELATIVE_PATH: &str = ".claude/settings.json";

/// Minimum time between two previews.
pub const DEFAULT_PREVIEW_COOLDOWN: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the sound suites.
    pub suites_root: PathBuf,
    /// Settings file the hooks are merged into.
    pub settings_path: PathBuf,
    /// Player override; auto-detected when `None`.
    pub player: Option<String>,
    pub preview_cooldown: Duration,
}

impl AppConfig {
    /// Config with defaults for everything except the suites root.
    pub fn new(suites_root: PathBuf) -> Result<Self, StartupError> {
        Ok(Self {
            suites_root,
            settings_path: default_settings_path()?,
            player: None,
            preview_cooldown: DEFAULT_PREVIEW_COOLDOWN,
        })
    }
}

/// `~/.claude/settings.json`.
pub fn default_settings_path() -> Result<PathBuf, StartupError> {
    dirs::home_dir()
        .map(|home| home.join(SETTINGS_RELATIVE_PATH))
        .ok_or(StartupError::NoHomeDir)
}
