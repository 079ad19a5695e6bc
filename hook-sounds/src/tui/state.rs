//! Selection state machine.
//!
//! ```text
//! Browsing --select--> Confirming(suite) --confirm--> Applying(suite) --ok--> Done(Applied)
//!    ^                      |                                          \--err--> Done(Failed)
//!    +-------deny-----------+
//! Browsing --quit--> Cancelled
//! ```
//!
//! The machine does no I/O. [`SelectionState::handle`] returns an [`Effect`]
//! for the run loop to carry out, and the apply result comes back through
//! [`SelectionState::finish_apply`].

use crate::tui::event::{Action, InputMode};
use hook_sounds_common::{ApplyOutcome, MergeError, SoundSuite};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Where the session is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Browsing,
    Confirming(SoundSuite),
    Applying(SoundSuite),
    Done(Outcome),
    Cancelled,
}

/// How an apply ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied { suite: String, result: ApplyOutcome },
    Failed { suite: String, error: String },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Preview(SoundSuite),
    Apply(SoundSuite),
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    pub suites: Vec<SoundSuite>,
    pub selected_index: usize,
    pub phase: Phase,
    /// Player name shown in the footer.
    pub player_name: String,
    /// Name of the last suite previewed.
    pub last_preview: Option<String>,
    preview_cooldown: Duration,
    next_preview_at: Option<Instant>,
}

impl SelectionState {
    pub fn new(
        suites: Vec<SoundSuite>,
        player_name: impl Into<String>,
        preview_cooldown: Duration,
    ) -> Self {
        Self {
            suites,
            selected_index: 0,
            phase: Phase::Browsing,
            player_name: player_name.into(),
            last_preview: None,
            preview_cooldown,
            next_preview_at: None,
        }
    }

    pub fn selected(&self) -> Option<&SoundSuite> {
        self.suites.get(self.selected_index)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Done(_) | Phase::Cancelled)
    }

    pub fn input_mode(&self) -> InputMode {
        match self.phase {
            Phase::Confirming(_) => InputMode::Dialog,
            _ => InputMode::List,
        }
    }

    /// Process one action.
    pub fn handle(&mut self, action: Action, now: Instant) -> Effect {
        match &self.phase {
            Phase::Browsing => self.handle_browsing(action, now),
            Phase::Confirming(suite) => {
                let suite = suite.clone();
                self.handle_confirming(action, suite)
            }
            Phase::Applying(_) | Phase::Done(_) | Phase::Cancelled => Effect::None,
        }
    }

    fn handle_browsing(&mut self, action: Action, now: Instant) -> Effect {
        match action {
            Action::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            Action::Down => {
                let max_index = self.suites.len().saturating_sub(1);
                if self.selected_index < max_index {
                    self.selected_index += 1;
                }
            }
            Action::Top => self.selected_index = 0,
            Action::Bottom => self.selected_index = self.suites.len().saturating_sub(1),
            Action::Select => {
                if let Some(suite) = self.selected().cloned() {
                    debug!(suite = %suite.name, "Confirming suite");
                    self.phase = Phase::Confirming(suite);
                }
            }
            Action::Preview => return self.request_preview(now),
            Action::Quit => {
                info!("Session cancelled");
                self.phase = Phase::Cancelled;
            }
            Action::Confirm | Action::Deny | Action::Redraw => {}
        }
        Effect::None
    }

    fn handle_confirming(&mut self, action: Action, suite: SoundSuite) -> Effect {
        match action {
            Action::Confirm => {
                info!(suite = %suite.name, "Applying suite");
                self.phase = Phase::Applying(suite.clone());
                Effect::Apply(suite)
            }
            Action::Deny => {
                debug!(suite = %suite.name, "Confirmation dismissed");
                self.phase = Phase::Browsing;
                Effect::None
            }
            Action::Quit => {
                info!("Session cancelled from confirmation");
                self.phase = Phase::Cancelled;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Preview the highlighted suite unless still cooling down.
    ///
    /// Requests inside the cooldown are dropped, not queued.
    fn request_preview(&mut self, now: Instant) -> Effect {
        if self.next_preview_at.is_some_and(|ready| now < ready) {
            debug!("Preview request dropped (cooldown)");
            return Effect::None;
        }
        let Some(suite) = self.selected().cloned() else {
            return Effect::None;
        };
        self.next_preview_at = Some(now + self.preview_cooldown);
        self.last_preview = Some(suite.name.clone());
        Effect::Preview(suite)
    }

    /// Record the merge result. Ignored unless an apply is in flight.
    pub fn finish_apply(&mut self, result: Result<ApplyOutcome, MergeError>) {
        let Phase::Applying(suite) = &self.phase else {
            warn!("Apply result arrived outside the applying phase");
            return;
        };
        let suite = suite.name.clone();
        let outcome = match result {
            Ok(result) => Outcome::Applied { suite, result },
            Err(err) => {
                warn!(suite = %suite, error = %err, "Apply failed");
                Outcome::Failed {
                    suite,
                    error: err.to_string(),
                }
            }
        };
        self.phase = Phase::Done(outcome);
    }
}
