//! TUI test harness utilities.
//!
//! Renders into ratatui's `TestBackend` so widgets can be checked without a
//! real terminal.

use ratatui::{Frame, Terminal, backend::TestBackend, buffer::Buffer};
use tracing::{debug, info};

/// Convert a buffer to text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for row in buffer.content.chunks(width.max(1)) {
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// Render with `draw` into a `width` x `height` test terminal.
pub fn render_to_string<F>(width: u16, height: u16, mut draw: F) -> String
where
    F: FnMut(&mut Frame),
{
    debug!("TEST HARNESS: render_to_string {}x{}", width, height);
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| draw(f)).expect("draw");
    buffer_to_string(terminal.backend().buffer())
}

/// Assert that rendered content contains an expected substring.
///
/// # Panics
///
/// Panics if the expected substring is not found in the content.
pub fn assert_rendered_contains(content: &str, expected: &str) {
    if !content.contains(expected) {
        info!("CONTENT:\n{}", content);
        panic!(
            "Expected rendered content to contain '{}' but it was not found",
            expected
        );
    }
}

/// Assert that rendered content does NOT contain a substring.
///
/// # Panics
///
/// Panics if the unexpected substring is found in the content.
pub fn assert_rendered_not_contains(content: &str, unexpected: &str) {
    if content.contains(unexpected) {
        info!("CONTENT:\n{}", content);
        panic!(
            "Expected rendered content to NOT contain '{}' but it was found",
            unexpected
        );
    }
}
