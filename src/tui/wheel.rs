//! Wheel rendering widget (the render surface).
//!
//! Draws the segmented wheel into the terminal cell grid: pie segments
//! filled with their assigned colors, dimmed separators on segment
//! boundaries, a centered label per segment along its mid-angle,
//! a rim, a center cap, and the fixed top pointer. Cell geometry is
//! corrected for the roughly 2:1 height/width aspect of terminal cells.
//!
//! The widget is a pure function of the list, the color assigner, and the
//! current display rotation; it holds no state of its own, so redraws on
//! resize cannot disturb a committed spin.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::spin::ColorAssigner;
use crate::tui::Theme;

/// Fraction of the radius taken by the decorative center cap.
const CAP_RADIUS_FRACTION: f64 = 0.18;

/// Fraction of the radius at which segment labels are centered.
const LABEL_RADIUS_FRACTION: f64 = 0.68;

/// Minimum characters kept before a label is truncated with an ellipsis.
const LABEL_MIN_CHARS: usize = 6;

/// One frame of the wheel.
pub struct WheelWidget<'a> {
    labels: &'a [String],
    colors: &'a ColorAssigner,
    rotation: f64,
    theme: &'a Theme,
}

impl<'a> WheelWidget<'a> {
    /// Creates a wheel frame for the given list, palette, and rotation.
    #[must_use]
    pub fn new(
        labels: &'a [String],
        colors: &'a ColorAssigner,
        rotation: f64,
        theme: &'a Theme,
    ) -> Self {
        Self {
            labels,
            colors,
            rotation,
            theme,
        }
    }
}

impl Widget for WheelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 5 {
            return;
        }

        let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
        let cy = f64::from(area.y) + f64::from(area.height) / 2.0;
        // Radius in horizontal cell units; vertical distances count double
        let radius = (f64::from(area.width) / 2.0 - 2.0).min(f64::from(area.height) - 2.0);
        if radius < 3.0 {
            return;
        }

        if self.labels.is_empty() {
            let msg = "List is empty - press e to edit";
            let x = (cx - msg.len() as f64 / 2.0).max(f64::from(area.x)) as u16;
            buf.set_stringn(
                x,
                cy as u16,
                msg,
                area.width as usize,
                Style::default().fg(self.theme.text_muted),
            );
            return;
        }

        let n = self.labels.len();
        let seg = 360.0 / n as f64;

        // Paint the disc cell by cell
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let dx = (f64::from(x) + 0.5) - cx;
                let dy = ((f64::from(y) + 0.5) - cy) * 2.0;
                let dist = dx.hypot(dy);
                if dist > radius {
                    continue;
                }

                let style = if dist <= radius * CAP_RADIUS_FRACTION {
                    Style::default().bg(Color::Rgb(235, 235, 235))
                } else if dist > radius - 1.2 {
                    Style::default().bg(self.theme.surface)
                } else {
                    // Angle in unrotated wheel space, 0 at segment 0's start
                    let angle = dy.atan2(dx).to_degrees();
                    let local = (angle - self.rotation + 90.0).rem_euclid(360.0);
                    let index = ((local / seg) as usize).min(n - 1);
                    let mut color = self.colors.color_for(&self.labels[index]);

                    // Separator where the arc distance to a boundary is sub-cell
                    if n > 1 {
                        let offset = local - index as f64 * seg;
                        let to_boundary = offset.min(seg - offset);
                        if to_boundary.to_radians() * dist < 0.7 {
                            color = color.dim(45.0);
                        }
                    }
                    Style::default().bg(color.to_color())
                };

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ');
                    cell.set_style(style);
                }
            }
        }

        self.render_labels(area, buf, cx, cy, radius, seg);
        self.render_pointer(area, buf, cx, cy, radius);
    }
}

impl WheelWidget<'_> {
    /// Draws each segment's label centered along its mid-angle.
    fn render_labels(&self, area: Rect, buf: &mut Buffer, cx: f64, cy: f64, radius: f64, seg: f64) {
        let style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        // Chord width at the label radius bounds the printable characters
        let chord = 2.0 * radius * LABEL_RADIUS_FRACTION * (seg / 2.0).to_radians().sin();
        let max_chars = ((chord - 2.0).floor().max(0.0) as usize).max(LABEL_MIN_CHARS);

        for (index, label) in self.labels.iter().enumerate() {
            let theta = (-90.0 + (index as f64 + 0.5) * seg + self.rotation).to_radians();
            let lx = cx + theta.cos() * radius * LABEL_RADIUS_FRACTION;
            let ly = cy + theta.sin() * radius * LABEL_RADIUS_FRACTION / 2.0;

            let text = ellipsis(label, max_chars);
            let len = text.chars().count() as f64;
            let start_x = (lx - len / 2.0).round();
            let y = ly.round();
            if y < f64::from(area.y) || y >= f64::from(area.y + area.height) {
                continue;
            }
            let x = start_x.max(f64::from(area.x)) as u16;
            let width = (f64::from(area.x + area.width) - f64::from(x)).max(0.0) as usize;
            buf.set_stringn(x, y as u16, &text, width, style);
        }
    }

    /// Draws the fixed pointer just above the top of the wheel.
    fn render_pointer(&self, area: Rect, buf: &mut Buffer, cx: f64, cy: f64, radius: f64) {
        let y = ((cy - radius / 2.0 - 1.0).round().max(f64::from(area.y))) as u16;
        let x = cx as u16;
        buf.set_stringn(
            x,
            y,
            "▼",
            1,
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Abbreviates `text` to at most `max_chars` characters with an ellipsis.
///
/// Keeps at least [`LABEL_MIN_CHARS`] characters before truncating, so very
/// narrow segments still show a recognizable prefix.
#[must_use]
pub fn ellipsis(text: &str, max_chars: usize) -> String {
    let max_chars = max_chars.max(LABEL_MIN_CHARS);
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsis_short_text_unchanged() {
        assert_eq!(ellipsis("Alice", 10), "Alice");
        assert_eq!(ellipsis("Bob", 6), "Bob");
    }

    #[test]
    fn test_ellipsis_truncates_long_text() {
        assert_eq!(ellipsis("a very long label", 8), "a very …");
    }

    #[test]
    fn test_ellipsis_keeps_at_least_six_chars() {
        // A max below the floor is clamped up to six
        assert_eq!(ellipsis("1234567890", 2), "12345…");
    }

    #[test]
    fn test_ellipsis_counts_chars_not_bytes() {
        assert_eq!(ellipsis("アイドル", 6), "アイドル");
        assert_eq!(ellipsis("花に亡霊とその他の長い題名", 6), "花に亡霊と…");
    }
}
