//! Deterministic per-label segment coloring.
//!
//! Each wheel gets a fixed hue band (people = blues, songs = greens) and
//! every label hashes to a stable position inside that band, so the wheel
//! looks the same on every redraw with no per-draw randomness.

use crate::models::HslColor;

/// FNV-1a 32-bit offset basis.
const FNV_OFFSET: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
const FNV_PRIME: u32 = 16_777_619;

/// Pure label-to-color assigner for one wheel.
///
/// Holds only the hue range configuration; the color is a pure function of
/// the label text, so equal labels always render identically within a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAssigner {
    hue_min: f64,
    hue_max: f64,
}

impl ColorAssigner {
    /// Creates an assigner interpolating hues within `[hue_min, hue_max]`.
    #[must_use]
    pub const fn new(hue_min: f64, hue_max: f64) -> Self {
        Self { hue_min, hue_max }
    }

    /// Returns the stable color for a label.
    ///
    /// Hue interpolates linearly within the configured band from a hash of
    /// the label. Saturation (65-75%) and lightness (48-58%) come from two
    /// further independent hashes (label with distinguishing suffixes), so
    /// distinct labels tend toward distinguishable but palette-consistent
    /// colors.
    #[must_use]
    pub fn color_for(&self, label: &str) -> HslColor {
        let h = self.hue_min + hash01(label) * (self.hue_max - self.hue_min);
        let s = 65.0 + hash01(&format!("{label}s")) * 10.0;
        let l = 48.0 + hash01(&format!("{label}l")) * 10.0;
        HslColor::new(h, s, l)
    }

    /// The configured hue range.
    #[must_use]
    pub const fn hue_range(&self) -> (f64, f64) {
        (self.hue_min, self.hue_max)
    }
}

/// Hashes a string to `[0, 1)` with 32-bit FNV-1a over its UTF-8 bytes.
fn hash01(s: &str) -> f64 {
    let mut h = FNV_OFFSET;
    for byte in s.bytes() {
        h ^= u32::from(byte);
        h = h.wrapping_mul(FNV_PRIME);
    }
    f64::from(h) / f64::from(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_deterministic() {
        let assigner = ColorAssigner::new(210.0, 255.0);
        assert_eq!(assigner.color_for("Alice"), assigner.color_for("Alice"));
    }

    #[test]
    fn test_distinct_labels_get_distinct_hues() {
        let assigner = ColorAssigner::new(210.0, 255.0);
        let alice = assigner.color_for("Alice");
        let bob = assigner.color_for("Bob");
        assert!((alice.h - bob.h).abs() > f64::EPSILON);
    }

    #[test]
    fn test_hue_stays_within_band() {
        let assigner = ColorAssigner::new(120.0, 165.0);
        for label in ["Lemon", "Pretender", "アイドル", "うっせぇわ", "x"] {
            let color = assigner.color_for(label);
            assert!(color.h >= 120.0 && color.h < 165.0, "hue {} out of band", color.h);
            assert!(color.s >= 65.0 && color.s < 75.0);
            assert!(color.l >= 48.0 && color.l < 58.0);
        }
    }

    #[test]
    fn test_hash01_range() {
        for s in ["", "a", "ab", "a longer string with spaces"] {
            let v = hash01(s);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
