//! Sound suite catalog.
//!
//! The configurator ships with a fixed set of themes. Each theme lives in its
//! own directory under the suites root and is only offered when its preview
//! sound is present on disk.

use crate::hooks::ManagedHook;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File every suite must provide to be listed.
pub const PREVIEW_FILE: &str = "session_start.wav";

/// A themed collection of hook sounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundSuite {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    pub preview_file: String,
}

impl SoundSuite {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            path: path.into(),
            preview_file: PREVIEW_FILE.to_string(),
        }
    }

    /// Full path of the sample played on preview.
    pub fn preview_path(&self) -> PathBuf {
        self.path.join(&self.preview_file)
    }

    /// Full path of the sound played for `hook`.
    pub fn sound_path(&self, hook: ManagedHook) -> PathBuf {
        self.path.join(format!("{}.wav", hook.file_stem()))
    }
}

/// Built-in suites as (name, directory relative to root, description).
///
/// An empty directory means the suite lives directly in the root.
const BUILTIN_SUITES: &[(&str, &str, &str)] = &[
    (
        "Terminal Native (Default)",
        "",
        "Original cyberpunk terminal aesthetic - warm and welcoming",
    ),
    (
        "Cyberpunk Intense",
        "prompt3style",
        "Enhanced digital grit with aggressive terminal energy",
    ),
    (
        "Retro Terminal",
        "retro-terminal",
        "Classic 80s computing with clean sine waves and nostalgia",
    ),
    (
        "Drift",
        "drift",
        "Ambient water soundscape for deep focus and flow state",
    ),
    (
        "Void",
        "void",
        "Cosmic liminal space with deep drones and stellar resonance",
    ),
];

/// Every known suite rooted at `root`, whether or not its files exist.
pub fn builtin_suites(root: &Path) -> Vec<SoundSuite> {
    BUILTIN_SUITES
        .iter()
        .map(|(name, dir, description)| {
            let path = if dir.is_empty() {
                root.to_path_buf()
            } else {
                root.join(dir)
            };
            SoundSuite::new(*name, *description, path)
        })
        .collect()
}

/// Scan `root` for available suites, in declaration order.
///
/// An empty result is valid here; the caller decides whether that is fatal.
pub fn scan(root: &Path) -> Vec<SoundSuite> {
    builtin_suites(root)
        .into_iter()
        .filter(|suite| {
            let available = suite.preview_path().is_file();
            debug!(
                suite = %suite.name,
                path = %suite.path.display(),
                available,
                "Scanned sound suite"
            );
            available
        })
        .collect()
}
