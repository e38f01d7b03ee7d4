//! List editor popup.
//!
//! Multi-line text entry for rebuilding a wheel's list wholesale, one
//! label per line. The edit buffer is applied with Ctrl+S and discarded
//! with Esc; the wheel itself is untouched until the parent receives the
//! applied text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::{centered_rect, Component};
use crate::tui::Theme;

/// Events emitted by the list editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// User applied the edited text (one label per line).
    Applied(String),
    /// User cancelled without changes.
    Cancelled,
}

/// List editor component state.
#[derive(Debug, Clone)]
pub struct ListEditor {
    /// Wheel title shown in the dialog header
    title: String,
    /// Current edit buffer
    text: String,
}

impl ListEditor {
    /// Creates an editor pre-filled with the wheel's current entries.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Live count of non-empty lines in the buffer.
    fn entry_count(&self) -> usize {
        self.text.lines().filter(|l| !l.trim().is_empty()).count()
    }
}

impl Component for ListEditor {
    type Event = EditorEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(EditorEvent::Applied(self.text.clone()));
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.text.push(c);
            }
            KeyCode::Enter => {
                self.text.push('\n');
            }
            KeyCode::Backspace => {
                self.text.pop();
            }
            KeyCode::Esc => {
                return Some(EditorEvent::Cancelled);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 70, area);

        frame.render_widget(Clear, dialog_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Edit buffer
                Constraint::Length(2), // Help text
            ])
            .split(dialog_area);

        let title = Paragraph::new(format!(
            "Edit {} list ({} items)",
            self.title,
            self.entry_count()
        ))
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
        frame.render_widget(title, chunks[0]);

        let buffer_text = format!("{}█", self.text);
        let editor = Paragraph::new(buffer_text)
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" One entry per line ")
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(editor, chunks[1]);

        let help = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Ctrl+S",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Apply  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ])])
        .style(Style::default().fg(theme.text).bg(theme.background));
        frame.render_widget(help, chunks[2]);
    }
}
