//! Quick-add input popup.
//!
//! Single-line entry appended to the focused wheel's list. Multiple
//! entries may be added at once separated by commas (half- or full-width)
//! or line breaks; the split happens in the list model.

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

/// Events emitted by the quick-add dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEntryEvent {
    /// User confirmed the raw input text.
    Confirmed(String),
    /// User cancelled the operation.
    Cancelled,
}

/// Quick-add component state.
#[derive(Debug, Clone, Default)]
pub struct AddEntry {
    /// Current input buffer
    input: String,
}

impl AddEntry {
    /// Creates an empty quick-add dialog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for AddEntry {
    type Event = AddEntryEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                return Some(AddEntryEvent::Confirmed(self.input.clone()));
            }
            KeyCode::Esc => {
                return Some(AddEntryEvent::Cancelled);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 30, area);

        frame.render_widget(Clear, dialog_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input field
                Constraint::Length(3), // Hint
                Constraint::Min(2),    // Help text
            ])
            .split(dialog_area);

        let input_text = format!("{}█", self.input);
        let input = Paragraph::new(input_text)
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Add entries ")
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(input, chunks[0]);

        let hint = Paragraph::new("Separate multiple entries with , or 、")
            .style(Style::default().fg(theme.text_muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(hint, chunks[1]);

        let help = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Add  "),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_confirms_raw_input() {
        let mut dialog = AddEntry::new();
        for c in "D, E".chars() {
            dialog.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(
            dialog.handle_input(key(KeyCode::Enter)),
            Some(AddEntryEvent::Confirmed("D, E".to_string()))
        );
    }

    #[test]
    fn test_backspace_edits() {
        let mut dialog = AddEntry::new();
        dialog.handle_input(key(KeyCode::Char('a')));
        dialog.handle_input(key(KeyCode::Char('b')));
        dialog.handle_input(key(KeyCode::Backspace));
        assert_eq!(
            dialog.handle_input(key(KeyCode::Enter)),
            Some(AddEntryEvent::Confirmed("a".to_string()))
        );
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = AddEntry::new();
        assert_eq!(
            dialog.handle_input(key(KeyCode::Esc)),
            Some(AddEntryEvent::Cancelled)
        );
    }
}
