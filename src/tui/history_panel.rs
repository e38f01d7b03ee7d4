//! History list widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::models::HistoryLog;
use crate::tui::Theme;

/// Renders one wheel's result history, most recent first.
pub struct HistoryPanel;

impl HistoryPanel {
    /// Renders the history log into `area`.
    pub fn render(f: &mut Frame, area: Rect, log: &HistoryLog, theme: &Theme) {
        let items: Vec<ListItem> = log
            .entries()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.at.format("%H:%M:%S ").to_string(),
                        Style::default().fg(theme.text_muted),
                    ),
                    Span::raw(format!("{} ", entry.icon)),
                    Span::styled(entry.label.clone(), Style::default().fg(theme.text)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" History ({}) ", log.len()))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(list, area);
    }
}
