//! TUI application runner.

use crate::tui::{
    event::next_action,
    state::{Effect, Outcome, Phase, SelectionState},
    widgets,
};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hook_sounds_common::{AppConfig, AudioPlayer, TargetPlatform, generate, settings};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::{debug, info};

/// Run the configurator until the user applies a suite or quits.
///
/// Returns the final phase; the terminal is restored even on error.
pub async fn run_tui(
    mut state: SelectionState,
    player: &AudioPlayer,
    config: &AppConfig,
) -> Result<Phase> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let result = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(mut terminal) => {
            let result = run_app(&mut terminal, &mut state, player, config).await;
            let _ = terminal.show_cursor();
            result
        }
        Err(err) => Err(err.into()),
    };

    restore_terminal(disable_raw_mode(), execute!(io::stdout(), LeaveAlternateScreen))?;

    result.map(|()| state.phase)
}

/// Combine the two restore steps; both have already run, the first error wins.
fn restore_terminal(raw_mode: io::Result<()>, alternate_screen: io::Result<()>) -> io::Result<()> {
    raw_mode.and(alternate_screen)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut SelectionState,
    player: &AudioPlayer,
    config: &AppConfig,
) -> Result<()> {
    let mut events = EventStream::new();

    while !state.is_terminal() {
        terminal.draw(|f| widgets::render(f, state))?;

        let Some(action) = next_action(&mut events, state.input_mode()).await? else {
            info!("Terminal event stream closed");
            break;
        };

        match state.handle(action, Instant::now()) {
            Effect::None => {}
            Effect::Preview(suite) => {
                debug!(suite = %suite.name, "Previewing suite");
                player.play(&suite.preview_path());
            }
            Effect::Apply(suite) => {
                terminal.draw(|f| widgets::render(f, state))?;
                let hooks = generate(&suite, &player.name, TargetPlatform::current());
                state.finish_apply(settings::apply(&config.settings_path, &hooks));
            }
        }
    }

    Ok(())
}

/// Print the outcome to stdout once the alternate screen is gone.
pub fn print_summary(phase: &Phase) {
    let lines: Vec<String> = widgets::summary_lines(phase)
        .iter()
        .map(|line| line.to_string())
        .collect();
    let Some((first, rest)) = lines.split_first() else {
        return;
    };
    match phase {
        Phase::Done(Outcome::Applied { .. }) => println!("{}", first.green().bold()),
        Phase::Done(Outcome::Failed { .. }) => println!("{}", first.red().bold()),
        _ => println!("{}", first),
    }
    for line in rest {
        println!("{}", line.dimmed());
    }
}
