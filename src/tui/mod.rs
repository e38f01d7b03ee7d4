//! Terminal user interface and application state.
//!
//! This module contains the main event loop, `AppState`, key dispatch, and
//! all UI widgets using Ratatui. The loop is single-threaded and
//! event-driven: every mutation happens in response to a key press, a
//! resize, or an animation tick, and one event is always handled to
//! completion before the next. The only "suspension" is the spin
//! animation, during which the owning wheel rejects further spin requests
//! while the other wheel stays fully independent.

pub mod add_entry;
pub mod component;
pub mod confirm;
pub mod editor;
pub mod history_panel;
pub mod status_bar;
pub mod theme;
pub mod wheel;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::{Config, WheelConfig};
use crate::constants::APP_NAME;
use crate::models::{HistoryEntry, HistoryLog, ListModel};
use crate::spin::{ColorAssigner, SpinEngine, SpinOutcome, SpinRequest};

// Re-export TUI components
pub use add_entry::{AddEntry, AddEntryEvent};
pub use component::Component;
pub use confirm::{ConfirmDialog, ConfirmEvent};
pub use editor::{EditorEvent, ListEditor};
pub use history_panel::HistoryPanel;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use wheel::WheelWidget;

/// How long a transient status message stays visible unless replaced.
const STATUS_TTL: Duration = Duration::from_millis(1200);

/// Warnings linger a little longer than plain announcements.
const WARNING_TTL: Duration = Duration::from_millis(2400);

/// Semantic kind of the current status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral information
    Info,
    /// Confirmation of a completed action
    Success,
    /// A rejected or guarded action
    Warning,
}

/// Transient status message with self-clearing expiry.
///
/// A later message replaces the current one and restarts the clock, so a
/// message only clears itself if nothing newer arrived.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    message: Option<(String, StatusKind)>,
    expires_at: Option<Instant>,
}

impl StatusLine {
    /// Shows a success announcement that self-clears.
    pub fn announce(&mut self, text: impl Into<String>) {
        self.set(text, StatusKind::Success, STATUS_TTL);
    }

    /// Shows a neutral message that self-clears.
    pub fn info(&mut self, text: impl Into<String>) {
        self.set(text, StatusKind::Info, STATUS_TTL);
    }

    /// Shows a warning that self-clears.
    pub fn warn(&mut self, text: impl Into<String>) {
        self.set(text, StatusKind::Warning, WARNING_TTL);
    }

    fn set(&mut self, text: impl Into<String>, kind: StatusKind, ttl: Duration) {
        self.message = Some((text.into(), kind));
        self.expires_at = Some(Instant::now() + ttl);
    }

    /// Drops the message once its expiry has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.expires_at.is_some_and(|at| now >= at) {
            self.message = None;
            self.expires_at = None;
        }
    }

    /// The current message, if any.
    #[must_use]
    pub fn current(&self) -> Option<(&str, StatusKind)> {
        self.message.as_ref().map(|(text, kind)| (text.as_str(), *kind))
    }
}

/// In-flight rotation animation for one wheel (the animation host).
///
/// The engine commits the final rotation up front; this only interpolates
/// the displayed rotation toward it and reports completion. Timing and
/// easing are presentation details, not selection contracts.
#[derive(Debug, Clone, Copy)]
pub struct SpinAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl SpinAnimation {
    /// Starts an animation from `from` to `to` degrees.
    #[must_use]
    pub fn new(from: f64, to: f64, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// The eased display rotation at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f64 {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(self.started).as_secs_f64()
                / self.duration.as_secs_f64())
            .clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * ease_out_quart(t)
    }

    /// Whether the animation has run its full duration.
    #[must_use]
    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Ease-out quartic, decelerating toward the settle point.
fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Everything one wheel owns: list, palette, engine, history, animation.
///
/// Two instances exist side by side with no shared state; "spin both" is
/// simply two independent spin requests.
#[derive(Debug, Clone)]
pub struct WheelState {
    /// Display title ("People", "Songs")
    pub title: String,
    /// Category icon used in results and history
    pub icon: String,
    /// Sample entries loadable on demand
    pub sample: Vec<String>,
    /// The ordered candidate list
    pub list: ListModel,
    /// Deterministic per-label segment colors
    pub colors: ColorAssigner,
    /// Spin state machine
    pub engine: SpinEngine,
    /// Bounded result history
    pub history: HistoryLog,
    /// Remove the picked label after each spin
    pub remove_after_pick: bool,
    /// Persistent result message for the last settled spin
    pub result: Option<String>,
    /// In-flight rotation animation, if spinning
    pub animation: Option<SpinAnimation>,
}

impl WheelState {
    /// Creates a wheel from its configuration, pre-loaded with the sample.
    #[must_use]
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            title: config.title.clone(),
            icon: config.icon.clone(),
            sample: config.sample.clone(),
            list: ListModel::from_labels(&config.sample),
            colors: ColorAssigner::new(config.hue_min, config.hue_max),
            engine: SpinEngine::new(),
            history: HistoryLog::new(),
            remove_after_pick: false,
            result: None,
            animation: None,
        }
    }

    /// The rotation to draw right now: the animated value while spinning,
    /// the engine's settled rotation otherwise.
    #[must_use]
    pub fn display_rotation(&self, now: Instant) -> f64 {
        self.animation
            .as_ref()
            .map_or_else(|| self.engine.rotation(), |anim| anim.value(now))
    }

    /// Rebuilds the list wholesale and resets the rotation (the segment
    /// geometry changed, so accumulated rotation must not carry over).
    pub fn apply_text(&mut self, text: &str) {
        self.list.set_from_text(text);
        self.engine.reset();
        self.result = None;
    }

    /// Replaces the list with the sample entries.
    pub fn load_sample(&mut self) {
        let text = self.sample.join("\n");
        self.apply_text(&text);
    }

    /// Requests a spin; on success, starts the rotation animation.
    pub fn start_spin(&mut self, duration: Duration, now: Instant) -> SpinRequest {
        let request = self.engine.spin(self.list.len());
        if let SpinRequest::Committed(target) = request {
            self.animation = Some(SpinAnimation::new(target.from, target.to, now, duration));
            self.result = Some("Spinning…".to_string());
        }
        request
    }

    /// Settles a finished animation: inverts the rotation to the picked
    /// label, reports it, records history, and applies remove-after-pick.
    pub fn tick(&mut self, now: Instant) -> Option<SpinOutcome> {
        if !self.animation.as_ref().is_some_and(|anim| anim.finished(now)) {
            return None;
        }
        self.animation = None;

        let index = self.engine.settle(self.list.len())?;
        let label = self.list.get(index)?.to_string();

        self.result = Some(format!("{} 「{}」 selected!", self.icon, label));
        self.history
            .record(HistoryEntry::new(self.icon.clone(), label.clone()));

        if self.remove_after_pick {
            self.list.remove_first_occurrence(&label);
            self.engine.reset();
        }

        Some(SpinOutcome { index, label })
    }

    /// Whether this wheel is mid-spin (list mutations are deferred).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.engine.is_spinning()
    }
}

/// Active popup component, if any.
pub enum Popup {
    /// Full list editor
    Editor(ListEditor),
    /// Quick-add input
    Add(AddEntry),
    /// Clear-all confirmation gate
    ConfirmClear(ConfirmDialog),
}

/// Top-level application state: both wheels plus UI chrome.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Resolved color theme
    pub theme: Theme,
    /// The two wheels (people, songs)
    pub wheels: Vec<WheelState>,
    /// Index of the focused wheel
    pub focus: usize,
    /// Active popup, if any
    pub popup: Option<Popup>,
    /// Transient status message line
    pub status: StatusLine,
}

impl AppState {
    /// Creates the application state from configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let wheels = vec![
            WheelState::new(&config.wheels.people),
            WheelState::new(&config.wheels.songs),
        ];
        Self {
            config,
            theme,
            wheels,
            focus: 0,
            popup: None,
            status: StatusLine::default(),
        }
    }

    /// The configured spin animation duration.
    #[must_use]
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.config.spin.duration_ms)
    }

    /// The currently focused wheel.
    #[must_use]
    pub fn focused_wheel(&self) -> &WheelState {
        &self.wheels[self.focus]
    }

    /// The currently focused wheel, mutably.
    pub fn focused_wheel_mut(&mut self) -> &mut WheelState {
        &mut self.wheels[self.focus]
    }
}

/// Set up the terminal for TUI rendering
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        let now = Instant::now();
        state.status.tick(now);

        // Settle any finished spin animations
        for wheel in &mut state.wheels {
            let _ = wheel.tick(now);
        }

        // Render current state
        terminal.draw(|f| render(f, state, now))?;

        // Short poll while animating for smooth rotation, relaxed otherwise
        let timeout = if state.wheels.iter().any(|w| w.animation.is_some()) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Redrawn next loop; committed spin targets are unaffected
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handle a key press. Returns `Ok(true)` when the user quits.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Popups swallow all input while open
    if let Some(mut popup) = state.popup.take() {
        let closed = match &mut popup {
            Popup::Editor(editor) => match editor.handle_input(key) {
                Some(EditorEvent::Applied(text)) => {
                    state.focused_wheel_mut().apply_text(&text);
                    state.status.announce("List updated");
                    true
                }
                Some(EditorEvent::Cancelled) => true,
                None => false,
            },
            Popup::Add(dialog) => match dialog.handle_input(key) {
                Some(AddEntryEvent::Confirmed(text)) => {
                    let wheel = state.focused_wheel_mut();
                    let added = wheel.list.append_from_text(&text);
                    if added > 0 {
                        // List length changed, so segment geometry did too
                        wheel.engine.reset();
                        state.status.announce(format!("Added {added} items"));
                    }
                    true
                }
                Some(AddEntryEvent::Cancelled) => true,
                None => false,
            },
            Popup::ConfirmClear(dialog) => match dialog.handle_input(key) {
                Some(ConfirmEvent::Confirmed) => {
                    let wheel = state.focused_wheel_mut();
                    wheel.list.clear();
                    wheel.engine.reset();
                    wheel.history.clear();
                    wheel.result = None;
                    state.status.announce("List cleared");
                    true
                }
                Some(ConfirmEvent::Cancelled) => true,
                None => false,
            },
        };
        if !closed {
            state.popup = Some(popup);
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Tab => state.focus = (state.focus + 1) % state.wheels.len(),
        KeyCode::Char(' ') => {
            let focus = state.focus;
            spin_wheel(state, focus);
        }
        KeyCode::Char('b') => {
            // Two independent requests, each governed by its own engine
            for index in 0..state.wheels.len() {
                spin_wheel(state, index);
            }
        }
        KeyCode::Char('s') => shuffle_focused(state),
        KeyCode::Char('e') => open_editor(state),
        KeyCode::Char('a') => open_add(state),
        KeyCode::Char('l') => load_sample(state),
        KeyCode::Char('r') => toggle_remove_after_pick(state),
        KeyCode::Char('c') => request_clear(state),
        KeyCode::Char('h') => clear_history(state),
        _ => {}
    }

    Ok(false)
}

fn spin_wheel(state: &mut AppState, index: usize) {
    let duration = state.spin_duration();
    match state.wheels[index].start_spin(duration, Instant::now()) {
        SpinRequest::TooFewItems => {
            state
                .status
                .warn("Not enough items - enter at least 2 to spin");
        }
        // Busy spins are an idempotent no-op
        SpinRequest::Busy | SpinRequest::Committed(_) => {}
    }
}

fn shuffle_focused(state: &mut AppState) {
    if state.focused_wheel().is_busy() {
        state.status.warn("Wait for the spin to finish");
        return;
    }
    if state.focused_wheel().list.len() < 2 {
        return; // Silently ignored below the threshold
    }
    state.focused_wheel_mut().list.shuffle();
    state.status.announce("Shuffled");
}

fn open_editor(state: &mut AppState) {
    if state.focused_wheel().is_busy() {
        state.status.warn("Wait for the spin to finish");
        return;
    }
    let wheel = state.focused_wheel();
    state.popup = Some(Popup::Editor(ListEditor::new(
        wheel.title.clone(),
        wheel.list.to_text(),
    )));
}

fn open_add(state: &mut AppState) {
    if state.focused_wheel().is_busy() {
        state.status.warn("Wait for the spin to finish");
        return;
    }
    state.popup = Some(Popup::Add(AddEntry::new()));
}

fn load_sample(state: &mut AppState) {
    if state.focused_wheel().is_busy() {
        state.status.warn("Wait for the spin to finish");
        return;
    }
    state.focused_wheel_mut().load_sample();
    state.status.announce("Sample loaded");
}

fn toggle_remove_after_pick(state: &mut AppState) {
    let wheel = state.focused_wheel_mut();
    wheel.remove_after_pick = !wheel.remove_after_pick;
    if wheel.remove_after_pick {
        state.status.announce("Remove after pick: on");
    } else {
        state.status.info("Remove after pick: off");
    }
}

fn request_clear(state: &mut AppState) {
    if state.focused_wheel().is_busy() {
        state.status.warn("Wait for the spin to finish");
        return;
    }
    if state.focused_wheel().list.is_empty() {
        return; // Nothing to clear, no prompt
    }
    let title = state.focused_wheel().title.clone();
    state.popup = Some(Popup::ConfirmClear(ConfirmDialog::new(format!(
        "Clear the entire {title} list? This also clears its history."
    ))));
}

fn clear_history(state: &mut AppState) {
    let wheel = state.focused_wheel_mut();
    if wheel.history.is_empty() {
        return;
    }
    wheel.history.clear();
    state.status.announce("History cleared");
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState, now: Instant) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(12),   // Wheels
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], &state.theme);

    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (index, wheel) in state.wheels.iter().enumerate() {
        render_wheel_column(
            f,
            columns[index],
            wheel,
            index == state.focus,
            &state.theme,
            now,
        );
    }

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(popup) = &state.popup {
        match popup {
            Popup::Editor(editor) => editor.render(f, f.area(), &state.theme),
            Popup::Add(dialog) => dialog.render(f, f.area(), &state.theme),
            Popup::ConfirmClear(dialog) => dialog.render(f, f.area(), &state.theme),
        }
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.text_muted),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(title, area);
}

fn render_wheel_column(
    f: &mut Frame,
    area: Rect,
    wheel: &WheelState,
    focused: bool,
    theme: &Theme,
    now: Instant,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let suffix = if wheel.remove_after_pick {
        " · remove-pick"
    } else {
        ""
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(
            " {} {} ({} items){} ",
            wheel.icon,
            wheel.title,
            wheel.list.len(),
            suffix
        ))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Wheel
            Constraint::Length(3), // Result
            Constraint::Length(8), // History
        ])
        .split(inner);

    let widget = WheelWidget::new(
        wheel.list.labels(),
        &wheel.colors,
        wheel.display_rotation(now),
        theme,
    );
    f.render_widget(widget, sections[0]);

    let (result_text, result_style) = wheel.result.as_ref().map_or_else(
        || {
            (
                "Press Space to spin".to_string(),
                Style::default().fg(theme.text_muted),
            )
        },
        |result| (result.clone(), Style::default().fg(theme.success)),
    );
    let result = Paragraph::new(result_text).style(result_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Result ")
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(result, sections[1]);

    HistoryPanel::render(f, sections[2], &wheel.history, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_wheel() -> WheelState {
        WheelState::new(&WheelConfig::people())
    }

    #[test]
    fn test_wheel_starts_with_sample() {
        let wheel = instant_wheel();
        assert_eq!(wheel.list.len(), 7);
        assert!(!wheel.is_busy());
    }

    #[test]
    fn test_spin_and_settle_reports_outcome() {
        let mut wheel = instant_wheel();
        let now = Instant::now();
        let request = wheel.start_spin(Duration::ZERO, now);
        assert!(matches!(request, SpinRequest::Committed(_)));
        assert!(wheel.is_busy());

        let outcome = wheel.tick(now).expect("zero-duration spin settles at once");
        assert!(outcome.index < 7);
        assert!(!wheel.is_busy());
        assert!(wheel.animation.is_none());
        assert_eq!(wheel.history.len(), 1);
        assert_eq!(wheel.history.entries()[0].label, outcome.label);
        let result = wheel.result.as_ref().unwrap();
        assert!(result.contains(&outcome.label));
        assert!(result.contains("selected!"));
        // Rotation normalized after settle
        assert!(wheel.engine.rotation() >= 0.0 && wheel.engine.rotation() < 360.0);
    }

    #[test]
    fn test_remove_after_pick_removes_and_resets() {
        let mut wheel = instant_wheel();
        wheel.remove_after_pick = true;
        let now = Instant::now();
        wheel.start_spin(Duration::ZERO, now);
        let outcome = wheel.tick(now).unwrap();
        assert_eq!(wheel.list.len(), 6);
        assert_eq!(wheel.engine.rotation(), 0.0);
        // The sample has no duplicates, so the picked label is gone
        assert!(!wheel.list.labels().contains(&outcome.label));
    }

    #[test]
    fn test_spin_guard_on_short_list() {
        let mut wheel = instant_wheel();
        wheel.apply_text("only one");
        let request = wheel.start_spin(Duration::ZERO, Instant::now());
        assert_eq!(request, SpinRequest::TooFewItems);
        assert!(wheel.animation.is_none());
        assert!(wheel.result.is_none());
    }

    #[test]
    fn test_second_spin_while_busy_is_ignored() {
        let mut wheel = instant_wheel();
        let now = Instant::now();
        wheel.start_spin(Duration::from_secs(4), now);
        let second = wheel.start_spin(Duration::from_secs(4), now);
        assert_eq!(second, SpinRequest::Busy);
    }

    #[test]
    fn test_animation_interpolates_between_endpoints() {
        let started = Instant::now();
        let anim = SpinAnimation::new(0.0, 1800.0, started, Duration::from_secs(4));
        assert_eq!(anim.value(started), 0.0);
        let end = started + Duration::from_secs(4);
        assert!((anim.value(end) - 1800.0).abs() < 1e-9);
        assert!(anim.finished(end));
        assert!(!anim.finished(started));
    }

    #[test]
    fn test_status_line_expires() {
        let mut status = StatusLine::default();
        status.announce("Shuffled");
        assert!(status.current().is_some());
        status.tick(Instant::now() + Duration::from_secs(2));
        assert!(status.current().is_none());
    }

    #[test]
    fn test_status_replacement_restarts_clock() {
        let mut status = StatusLine::default();
        status.announce("first");
        status.warn("second");
        let (text, kind) = status.current().unwrap();
        assert_eq!(text, "second");
        assert_eq!(kind, StatusKind::Warning);
    }

    #[test]
    fn test_toggle_off_reports_neutral_info() {
        let mut state = AppState::new(Config::default());
        toggle_remove_after_pick(&mut state);
        assert_eq!(
            state.status.current(),
            Some(("Remove after pick: on", StatusKind::Success))
        );
        toggle_remove_after_pick(&mut state);
        assert_eq!(
            state.status.current(),
            Some(("Remove after pick: off", StatusKind::Info))
        );
    }

    #[test]
    fn test_quit_keys_end_the_loop() {
        let mut state = AppState::new(Config::default());
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let key = KeyEvent::new(code, crossterm::event::KeyModifiers::NONE);
            assert!(handle_key_event(&mut state, key).unwrap());
        }
    }
}
