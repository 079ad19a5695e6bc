//! Audio player detection and preview playback.
//!
//! The player is resolved once at startup and passed by value to whatever
//! needs it. Preview playback is fire and forget: the child runs on a
//! detached task, nothing waits for it and every failure is dropped.

use crate::errors::StartupError;
use crate::hooks::TargetPlatform;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::{debug, info};

/// Players tried in order on Unix-like systems.
pub const UNIX_PLAYERS: &[&str] = &["afplay", "paplay", "aplay"];

/// Players tried in order on Windows.
pub const WINDOWS_PLAYERS: &[&str] = &["powershell", "pwsh"];

/// A resolved audio player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPlayer {
    /// Name as written into generated hook commands.
    pub name: String,
    /// Location found on `PATH`.
    pub path: PathBuf,
    pub platform: TargetPlatform,
}

impl AudioPlayer {
    /// Detect a player for the current platform.
    pub fn detect() -> Result<Self, StartupError> {
        let platform = TargetPlatform::current();
        Self::detect_with(candidates_for(platform), platform, |name| {
            which::which(name).ok()
        })
    }

    /// Resolve a user-supplied player name.
    pub fn from_override(name: &str) -> Result<Self, StartupError> {
        let platform = TargetPlatform::current();
        let path = which::which(name).map_err(|_| StartupError::PlayerNotFound {
            name: name.to_string(),
        })?;
        info!(player = name, path = %path.display(), "Using configured audio player");
        Ok(Self {
            name: name.to_string(),
            path,
            platform,
        })
    }

    /// First of `candidates` that `lookup` resolves.
    pub fn detect_with<F>(
        candidates: &[&str],
        platform: TargetPlatform,
        lookup: F,
    ) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        for name in candidates {
            if let Some(path) = lookup(name) {
                info!(player = name, path = %path.display(), "Detected audio player");
                return Ok(Self {
                    name: (*name).to_string(),
                    path,
                    platform,
                });
            }
            debug!(player = name, "Audio player not found");
        }
        Err(StartupError::NoAudioPlayer {
            tried: candidates.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Command that plays `file` once.
    pub fn preview_command(&self, file: &Path) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.path);
        match self.platform {
            TargetPlatform::Windows => {
                let escaped = file.to_string_lossy().replace('\'', "''");
                cmd.arg("-c").arg(format!(
                    "(New-Object Media.SoundPlayer '{}').PlaySync();",
                    escaped
                ));
            }
            TargetPlatform::Unix => {
                cmd.arg(file);
            }
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Play `file` in the background. Fire and forget, errors discarded.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn play(&self, file: &Path) {
        let mut cmd = self.preview_command(file);
        let file = file.to_path_buf();
        tokio::spawn(async move {
            match cmd.spawn() {
                Ok(mut child) => {
                    let status = child.wait().await;
                    debug!(file = %file.display(), ?status, "Preview finished");
                }
                Err(err) => {
                    debug!(file = %file.display(), error = %err, "Preview failed to start");
                }
            }
        });
    }
}

/// Candidate player names for `platform`.
pub fn candidates_for(platform: TargetPlatform) -> &'static [&'static str] {
    match platform {
        TargetPlatform::Windows => WINDOWS_PLAYERS,
        TargetPlatform::Unix => UNIX_PLAYERS,
    }
}
