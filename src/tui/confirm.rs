//! Confirmation dialog for destructive actions.
//!
//! The clear-all action is gated behind this dialog; cancelling leaves
//! all state untouched.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::component::{centered_rect, Component};
use crate::tui::Theme;

/// Events emitted by the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    /// User confirmed the action.
    Confirmed,
    /// User cancelled; nothing happens.
    Cancelled,
}

/// Confirmation dialog component state.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    /// Question shown to the user
    message: String,
}

impl ConfirmDialog {
    /// Creates a dialog asking `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Component for ConfirmDialog {
    type Event = ConfirmEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(ConfirmEvent::Confirmed),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(ConfirmEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(50, 25, area);

        frame.render_widget(Clear, dialog_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Message
                Constraint::Length(2), // Help text
            ])
            .split(dialog_area);

        let message = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Confirm ")
                    .border_style(Style::default().fg(theme.warning))
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(message, chunks[0]);

        let help = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Yes  "),
            Span::styled(
                "n",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("/"),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" No"),
        ])])
        .style(Style::default().fg(theme.text).bg(theme.background));
        frame.render_widget(help, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_yes_confirms() {
        let mut dialog = ConfirmDialog::new("Clear this list?");
        assert_eq!(
            dialog.handle_input(key(KeyCode::Char('y'))),
            Some(ConfirmEvent::Confirmed)
        );
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = ConfirmDialog::new("Clear this list?");
        assert_eq!(
            dialog.handle_input(key(KeyCode::Esc)),
            Some(ConfirmEvent::Cancelled)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut dialog = ConfirmDialog::new("Clear this list?");
        assert_eq!(dialog.handle_input(key(KeyCode::Char('x'))), None);
    }
}
