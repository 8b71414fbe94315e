//! Levelgauge - XP level calculator
//!
//! Turns a total XP value into a level, the XP earned toward the next
//! level, and a terminal progress bar.

pub mod progression;
pub mod ui;

// Re-export commonly used types
pub use progression::{ProgressionState, LevelError, resolve_level, try_resolve_level};
pub use ui::{ReportStyle, render_report};
