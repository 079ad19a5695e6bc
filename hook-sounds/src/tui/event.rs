//! Event handling for the TUI.
//!
//! Maps crossterm key events to [`Action`]s. The mapping depends on whether
//! the suite list or the confirmation dialog has focus.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;

/// Keyboard action from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave without changing anything.
    Quit,
    /// Move highlight up.
    Up,
    /// Move highlight down.
    Down,
    /// Jump to first suite.
    Top,
    /// Jump to last suite.
    Bottom,
    /// Pick the highlighted suite.
    Select,
    /// Play the highlighted suite's sample.
    Preview,
    /// Accept the confirmation dialog.
    Confirm,
    /// Dismiss the confirmation dialog.
    Deny,
    /// Terminal resized; redraw only.
    Redraw,
}

/// Which part of the UI receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    List,
    Dialog,
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Convert key event to action while browsing the list.
fn handle_key(key: KeyEvent) -> Option<Action> {
    if is_interrupt(&key) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Action::Preview),
        _ => None,
    }
}

/// Convert key event to action while the confirmation dialog is open.
fn handle_key_dialog_mode(key: KeyEvent) -> Option<Action> {
    if is_interrupt(&key) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Deny),
        _ => None,
    }
}

/// Map a terminal event to an action. Key releases and repeats are ignored.
pub fn map_event(event: Event, mode: InputMode) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
            InputMode::List => handle_key(key),
            InputMode::Dialog => handle_key_dialog_mode(key),
        },
        Event::Resize(_, _) => Some(Action::Redraw),
        _ => None,
    }
}

/// Wait for the next event that maps to an action.
///
/// Returns `None` when the event stream ends.
pub async fn next_action(
    events: &mut EventStream,
    mode: InputMode,
) -> std::io::Result<Option<Action>> {
    while let Some(event) = events.next().await {
        if let Some(action) = map_event(event?, mode) {
            return Ok(Some(action));
        }
    }
    Ok(None)
}
