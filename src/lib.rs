//! Lottery Wheel Library
//!
//! This library provides core functionality for the WheelSpin application,
//! including the candidate list model, deterministic segment coloring, the
//! spin state machine with its angle math, and the result history log.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod spin;
pub mod tui;
