//! The algorithmic core of the wheel.
//!
//! This module holds the only logic with non-obvious invariants: the spin
//! state machine with its forward/inverse angle math, and the deterministic
//! label-to-color assignment. Both are pure of any rendering or terminal
//! dependency so they can be unit-tested in isolation.

mod color;
mod engine;

pub use color::ColorAssigner;
pub use engine::{
    index_for_rotation, target_rotation, SpinEngine, SpinOutcome, SpinRequest, SpinTarget,
};
