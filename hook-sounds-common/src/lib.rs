//! Shared types and logic for the hook-sounds configurator.
//!
//! - [`catalog`]: built-in sound suites and the on-disk scan
//! - [`hooks`]: managed hook events and command generation
//! - [`settings`]: backup-then-merge of the host settings file
//! - [`player`]: audio player detection and preview playback

pub mod catalog;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod logging;
pub mod player;
pub mod settings;

pub use catalog::{SoundSuite, scan};
pub use config::{AppConfig, DEFAULT_PREVIEW_COOLDOWN, default_settings_path};
pub use errors::{MergeError, StartupError};
pub use hooks::{HookEntry, HookSet, ManagedHook, TargetPlatform, generate};
pub use logging::{LogConfig, LoggingGuards, init_logging};
pub use player::AudioPlayer;
pub use settings::{ApplyOutcome, apply};
