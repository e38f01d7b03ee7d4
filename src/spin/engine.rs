//! Spin state machine and rotation angle math.
//!
//! The engine tracks the wheel's accumulated rotation in degrees and moves
//! between `Idle` and `Spinning`. A spin request commits a final rotation
//! immediately; the host animates toward it and reports completion, at
//! which point [`SpinEngine::settle`] inverts the angle back to the picked
//! segment index.
//!
//! Geometry convention: with `n` segments each spanning `seg = 360/n`
//! degrees, segment `i` spans `[-90 + i*seg, -90 + (i+1)*seg)` measured
//! from the fixed pointer at the top (-90°), clockwise with increasing
//! index. Rotating the wheel by `θ` moves segment `i`'s center to
//! `-90 + (i + 0.5)*seg + θ`.

/// Minimum number of extra full turns added to every spin.
const MIN_EXTRA_TURNS: f64 = 5.0;

/// Random jitter added on top of the minimum turn count (0..3 turns).
const EXTRA_TURN_JITTER: f64 = 3.0;

/// Phase of the spin state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    /// Ready to accept a spin request.
    #[default]
    Idle,
    /// A target rotation is committed and animating; further requests are
    /// ignored until the host reports completion.
    Spinning,
}

/// Committed animation target for one spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTarget {
    /// Accumulated rotation before the spin, in degrees.
    pub from: f64,
    /// Final accumulated rotation, in degrees. Always greater than `from`.
    pub to: f64,
}

/// Result of a spin request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRequest {
    /// The spin was accepted; animate from `target.from` to `target.to`.
    Committed(SpinTarget),
    /// A spin is already in progress; the request is a no-op.
    Busy,
    /// The list has fewer than two entries; nothing changed.
    TooFewItems,
}

/// Outcome of a settled spin, paired with the picked label by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    /// Index of the picked segment in `[0, n)`.
    pub index: usize,
    /// Label of the picked segment.
    pub label: String,
}

/// Computes the final accumulated rotation for a spin.
///
/// Pure function of the current rotation, the segment count, the picked
/// index, and the extra turn count. The rotation (mod 360) at which the
/// center of segment `pick` aligns with the top pointer is
/// `(n - pick - 0.5) * seg`; the extra turns (>= 5) provide the visible
/// spin and guarantee the result is strictly greater than `current`.
#[must_use]
pub fn target_rotation(current: f64, n: usize, pick: usize, extra_turns: f64) -> f64 {
    debug_assert!(n >= 2 && pick < n);
    let seg = 360.0 / n as f64;
    let target_norm = (n as f64 - pick as f64 - 0.5) * seg;
    let base = current + extra_turns * 360.0;
    // Minimal forward adjustment so the final value mod 360 hits the target
    let delta = (target_norm - base.rem_euclid(360.0)).rem_euclid(360.0);
    base + delta
}

/// Recovers the picked segment index from a settled rotation.
///
/// Exact inverse of [`target_rotation`] modulo 360 for every `pick` in
/// `[0, n)`: with the wheel rotated by `deg`, the segment under the top
/// pointer is `floor(n - deg/seg) mod n`.
#[must_use]
pub fn index_for_rotation(rotation: f64, n: usize) -> usize {
    debug_assert!(n >= 1);
    let seg = 360.0 / n as f64;
    let deg = rotation.rem_euclid(360.0);
    ((n as f64 - deg / seg).floor() as i64).rem_euclid(n as i64) as usize
}

/// Spin state machine for one wheel.
///
/// Owns the accumulated rotation. Rotation is monotonically increased by
/// each spin and only normalized back into `[0, 360)` when a spin settles,
/// so future spin deltas stay numerically small.
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    phase: Phase,
    rotation: f64,
}

impl SpinEngine {
    /// Creates an engine at rest with zero rotation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a spin over a wheel of `n` segments.
    ///
    /// Picks a uniform random index, commits the final rotation, and
    /// enters `Spinning`. Returns [`SpinRequest::Busy`] while a spin is in
    /// progress and [`SpinRequest::TooFewItems`] for `n < 2`; neither
    /// mutates any state.
    pub fn spin(&mut self, n: usize) -> SpinRequest {
        if self.phase == Phase::Spinning {
            return SpinRequest::Busy;
        }
        if n < 2 {
            return SpinRequest::TooFewItems;
        }

        let pick = fastrand::usize(..n);
        let extra_turns = MIN_EXTRA_TURNS + fastrand::f64() * EXTRA_TURN_JITTER;
        let from = self.rotation;
        let to = target_rotation(from, n, pick, extra_turns);

        self.rotation = to;
        self.phase = Phase::Spinning;
        SpinRequest::Committed(SpinTarget { from, to })
    }

    /// Settles the current spin after the host reports animation completion.
    ///
    /// Normalizes the stored rotation into `[0, 360)`, returns the picked
    /// index, and becomes `Idle` again. Returns `None` if no spin is in
    /// progress, so unrelated completion signals are ignored.
    pub fn settle(&mut self, n: usize) -> Option<usize> {
        if self.phase != Phase::Spinning {
            return None;
        }
        self.rotation = self.rotation.rem_euclid(360.0);
        self.phase = Phase::Idle;
        Some(index_for_rotation(self.rotation, n))
    }

    /// Resets the rotation to zero.
    ///
    /// Called whenever the list is rebuilt or an entry is removed: the
    /// segment geometry changed, so accumulated rotation must not carry
    /// over. Not permitted mid-spin (the committed target always runs to
    /// completion), so this is a no-op while `Spinning`.
    pub fn reset(&mut self) {
        if self.phase == Phase::Idle {
            self.rotation = 0.0;
        }
    }

    /// The accumulated rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Whether a spin is currently in progress.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Spinning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_lands_on_segment_center() {
        // n=2, pick=0: the pointer sits at (2 - 0 - 0.5) * 180 = 270 mod 360
        let target = target_rotation(0.0, 2, 0, 5.0);
        assert!((target.rem_euclid(360.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_always_moves_forward() {
        let mut current = 0.0;
        for pick in [0usize, 3, 6] {
            let next = target_rotation(current, 7, pick, 5.0);
            assert!(next > current);
            current = next.rem_euclid(360.0);
        }
    }

    #[test]
    fn test_target_adds_at_least_five_turns() {
        let target = target_rotation(100.0, 4, 2, 5.0);
        assert!(target >= 100.0 + 5.0 * 360.0);
    }

    #[test]
    fn test_settle_ignored_when_idle() {
        let mut engine = SpinEngine::new();
        assert_eq!(engine.settle(5), None);
    }

    #[test]
    fn test_spin_rejects_short_lists() {
        let mut engine = SpinEngine::new();
        assert_eq!(engine.spin(0), SpinRequest::TooFewItems);
        assert_eq!(engine.spin(1), SpinRequest::TooFewItems);
        assert_eq!(engine.rotation(), 0.0);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut engine = SpinEngine::new();
        let SpinRequest::Committed(target) = engine.spin(3) else {
            panic!("first spin should commit");
        };
        assert_eq!(engine.spin(3), SpinRequest::Busy);
        assert_eq!(engine.rotation(), target.to);
    }

    #[test]
    fn test_settle_normalizes_rotation() {
        let mut engine = SpinEngine::new();
        let SpinRequest::Committed(target) = engine.spin(4) else {
            panic!("spin should commit");
        };
        let index = engine.settle(4).unwrap();
        assert!(index < 4);
        assert!(engine.rotation() >= 0.0 && engine.rotation() < 360.0);
        assert_eq!(engine.rotation(), target.to.rem_euclid(360.0));
    }

    #[test]
    fn test_reset_is_blocked_mid_spin() {
        let mut engine = SpinEngine::new();
        engine.spin(3);
        engine.reset();
        assert!(engine.rotation() > 0.0);
        engine.settle(3);
        engine.reset();
        assert_eq!(engine.rotation(), 0.0);
    }
}
