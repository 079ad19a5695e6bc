//! Rendering for the configurator.

use crate::tui::state::{Outcome, Phase, SelectionState};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub const TITLE: &str = "🎵 Hook Sounds Configurator";

const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);
const MUTED: Color = Color::Rgb(0x62, 0x62, 0x62);
const SUCCESS: Color = Color::Rgb(0x04, 0xB5, 0x75);
const ERROR: Color = Color::Rgb(0xFF, 0x00, 0x00);

/// Render the whole screen for the current phase.
pub fn render(f: &mut Frame, state: &SelectionState) {
    let area = f.area();
    match &state.phase {
        Phase::Browsing => render_browser(f, area, state),
        Phase::Confirming(suite) => {
            render_browser(f, area, state);
            render_confirm_dialog(f, area, &suite.name, &suite.description);
        }
        Phase::Applying(suite) => {
            render_browser(f, area, state);
            let text = format!("Applying '{}'...", suite.name);
            render_popup(f, area, Paragraph::new(text), 40, 5);
        }
        Phase::Done(_) | Phase::Cancelled => {
            let lines = summary_lines(&state.phase);
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        }
    }
}

fn render_browser(f: &mut Frame, area: Rect, state: &SelectionState) {
    let [title_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(4),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, title_area.inner(ratatui::layout::Margin::new(2, 0)));

    let items: Vec<ListItem> = state
        .suites
        .iter()
        .map(|suite| {
            ListItem::new(vec![
                Line::from(suite.name.clone()),
                Line::from(Span::styled(
                    suite.description.clone(),
                    Style::default().fg(MUTED),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("│ ");
    let mut list_state = ListState::default().with_selected(Some(state.selected_index));
    f.render_stateful_widget(list, list_area, &mut list_state);

    let muted = Style::default().fg(MUTED);
    let mut footer = vec![
        Line::from(Span::styled(
            "  ↑/↓: navigate  •  enter: select  •  p/space: preview  •  q: quit",
            muted,
        )),
        Line::from(Span::styled(
            format!("  Audio player: {}", state.player_name),
            muted,
        )),
    ];
    if let Some(name) = &state.last_preview {
        footer.push(Line::from(Span::styled(
            format!("  🔊 Previewing: {}", name),
            muted,
        )));
    }
    f.render_widget(Paragraph::new(footer), footer_area);
}

fn render_confirm_dialog(f: &mut Frame, area: Rect, name: &str, description: &str) {
    let muted = Style::default().fg(MUTED);
    let lines = vec![
        Line::from(Span::styled(
            "💾 Confirm Theme Change",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Apply '{}' theme?", name)),
        Line::from(Span::styled(format!("  {}", description), muted)),
        Line::from(""),
        Line::from("  This will:"),
        Line::from("  • Create a backup of your current settings"),
        Line::from("  • Update all 10 sound hooks"),
        Line::from("  • Preserve your other custom hooks"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Press Y to save and apply",
                Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" • "),
            Span::styled(
                "N or ESC to cancel",
                Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    render_popup(f, area, Paragraph::new(lines), 64, 15);
}

fn render_popup(f: &mut Frame, area: Rect, body: Paragraph, width: u16, height: u16) {
    let popup = centered(area, width, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(popup).inner(ratatui::layout::Margin::new(2, 1));
    f.render_widget(Clear, popup);
    f.render_widget(block, popup);
    f.render_widget(body.wrap(Wrap { trim: false }), inner);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Final-state text, also printed after the terminal is restored.
pub fn summary_lines(phase: &Phase) -> Vec<Line<'static>> {
    match phase {
        Phase::Done(Outcome::Applied { suite, result }) => {
            let muted = Style::default().fg(MUTED);
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("✅ Successfully configured '{}' theme!", suite),
                    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "Your settings have been updated at {}",
                        result.settings_path.display()
                    ),
                    muted,
                )),
            ];
            lines.push(Line::from(Span::styled(
                match &result.backup_path {
                    Some(backup) => format!("A backup was created at {}", backup.display()),
                    None => "No previous settings existed, so no backup was needed.".to_string(),
                },
                muted,
            )));
            lines
        }
        Phase::Done(Outcome::Failed { error, .. }) => vec![Line::from(Span::styled(
            format!("❌ Error: {}", error),
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        ))],
        Phase::Cancelled => vec![Line::from("Goodbye!")],
        Phase::Browsing | Phase::Confirming(_) | Phase::Applying(_) => Vec::new(),
    }
}
