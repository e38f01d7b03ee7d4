//! Status bar widget for transient messages and key help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, StatusKind, Theme};

/// Key hints shown on the bottom help line.
const HELP_HINTS: &[(&str, &str)] = &[
    ("Tab", "Focus"),
    ("Space", "Spin"),
    ("b", "Spin both"),
    ("s", "Shuffle"),
    ("e", "Edit"),
    ("a", "Add"),
    ("l", "Sample"),
    ("r", "Remove-pick"),
    ("c", "Clear"),
    ("h", "Clear history"),
    ("q", "Quit"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: transient message line plus static key help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = state.status.current().map_or_else(
            || Line::from(""),
            |(text, kind)| {
                let color = match kind {
                    StatusKind::Info => theme.text,
                    StatusKind::Success => theme.success,
                    StatusKind::Warning => theme.warning,
                };
                Line::from(Span::styled(text.to_string(), Style::default().fg(color)))
            },
        );

        let mut help_spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in HELP_HINTS.iter().enumerate() {
            if i > 0 {
                help_spans.push(Span::raw(" | "));
            }
            help_spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            help_spans.push(Span::raw(" "));
            help_spans.push(Span::styled(
                *action,
                Style::default().fg(theme.text_muted),
            ));
        }

        let status = Paragraph::new(vec![message_line, Line::from(help_spans)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }
}
