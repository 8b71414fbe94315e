//! Terminal output
//!
//! Text rendering of progression state: a progress gauge and the level report.

pub mod gauge;
pub mod report;

pub use gauge::{Gauge, DEFAULT_BAR_WIDTH, render_progress_bar, render_progress_bar_styled};
pub use report::{ReportStyle, render_report};
