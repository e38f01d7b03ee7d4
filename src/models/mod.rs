//! Data models for the lottery wheel.
//!
//! This module contains the pure data layer: the ordered candidate list,
//! the bounded result history, and the HSL color value type. None of these
//! types know anything about rendering or input handling.

mod history;
mod hsl;
mod list;

pub use history::{HistoryEntry, HistoryLog, HISTORY_CAP};
pub use hsl::HslColor;
pub use list::ListModel;
