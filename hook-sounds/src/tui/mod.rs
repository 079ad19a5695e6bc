//! Interactive suite picker.
//!
//! Lists the available suites, previews them and applies the chosen one
//! after confirmation, using ratatui for rendering.

mod app;
mod event;
mod state;
#[cfg(test)]
mod test_harness;
mod widgets;

pub use app::{print_summary, run_tui};
pub use state::SelectionState;
