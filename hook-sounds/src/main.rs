//! Hook Sounds - interactive sound-suite configurator
//!
//! Lists the sound suites found under the root directory, previews them and
//! writes the chosen suite's hooks into the host settings file.

#![forbid(unsafe_code)]

mod tui;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hook_sounds_common::{
    AppConfig, AudioPlayer, DEFAULT_PREVIEW_COOLDOWN, LogConfig, SoundSuite, StartupError,
    init_logging, scan,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "hook-sounds")]
#[command(author, version, about = "Pick a sound suite and install its hooks")]
struct Cli {
    /// Directory holding the sound suites (default: current directory)
    #[arg(long, env = "HOOK_SOUNDS_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,

    /// Settings file to update (default: ~/.claude/settings.json)
    #[arg(long, env = "HOOK_SOUNDS_SETTINGS", value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Audio player to use instead of auto-detection
    #[arg(long, env = "HOOK_SOUNDS_PLAYER", value_name = "NAME")]
    player: Option<String>,

    /// Minimum time between two previews (e.g. "1s", "500ms")
    #[arg(
        long,
        env = "HOOK_SOUNDS_PREVIEW_COOLDOWN",
        value_name = "DURATION",
        value_parser = humantime::parse_duration
    )]
    preview_cooldown: Option<Duration>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig, StartupError> {
        let suites_root = resolve_root(self.root, std::env::current_dir)?;
        let mut config = match self.settings {
            Some(settings_path) => AppConfig {
                suites_root,
                settings_path,
                player: None,
                preview_cooldown: DEFAULT_PREVIEW_COOLDOWN,
            },
            None => AppConfig::new(suites_root)?,
        };
        config.player = self.player;
        if let Some(cooldown) = self.preview_cooldown {
            config.preview_cooldown = cooldown;
        }
        Ok(config)
    }
}

/// The `--root` value, or the current directory when it is absent.
fn resolve_root<F>(root: Option<PathBuf>, current_dir: F) -> Result<PathBuf, StartupError>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    match root {
        Some(root) => Ok(root),
        None => current_dir().map_err(|source| StartupError::NoWorkingDir { source }),
    }
}

/// Everything the picker needs, resolved before the terminal is touched.
struct Startup {
    config: AppConfig,
    player: AudioPlayer,
    suites: Vec<SoundSuite>,
}

fn prepare(cli: Cli) -> Result<Startup, StartupError> {
    let config = cli.into_config()?;
    let player = match config.player.as_deref() {
        Some(name) => AudioPlayer::from_override(name)?,
        None => AudioPlayer::detect()?,
    };
    let suites = scan(&config.suites_root);
    if suites.is_empty() {
        return Err(StartupError::NoSuites {
            root: config.suites_root.clone(),
        });
    }
    info!(
        root = %config.suites_root.display(),
        settings = %config.settings_path.display(),
        suites = suites.len(),
        "Starting configurator"
    );
    Ok(Startup {
        config,
        player,
        suites,
    })
}

fn report_startup_error(err: &StartupError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    for hint in err.hints() {
        eprintln!("  {}", hint.dimmed());
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env("info");
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    // An unwritable log directory must not stop the picker.
    let _guards = match init_logging(&log_config) {
        Ok(guards) => Some(guards),
        Err(_) => {
            log_config.directory = None;
            init_logging(&log_config).ok()
        }
    };

    let startup = match prepare(cli) {
        Ok(startup) => startup,
        Err(err) => {
            error!(error = %err, "Startup failed");
            report_startup_error(&err);
            return ExitCode::from(1);
        }
    };

    let state = tui::SelectionState::new(
        startup.suites,
        startup.player.name.clone(),
        startup.config.preview_cooldown,
    );

    match tui::run_tui(state, &startup.player, &startup.config).await {
        Ok(phase) => {
            info!(?phase, "Configurator finished");
            tui::print_summary(&phase);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Terminal error");
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}
