//! Level report
//!
//! Plain-text summary of a resolved progression state.

use crate::progression::ProgressionState;
use super::gauge::{render_progress_bar, render_progress_bar_styled};

/// Options for rendering a report
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    pub bar_width: usize,
    /// Color the progress bar with ANSI escapes
    pub colored: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            bar_width: super::gauge::DEFAULT_BAR_WIDTH,
            colored: false,
        }
    }
}

pub fn level_summary(total_xp: f64, state: &ProgressionState) -> String {
    format!("With {} XP, you are at level {}.", total_xp, state.level)
}

/// XP line; XP into the level always reads as a real value (`293.0`)
pub fn xp_summary(state: &ProgressionState) -> String {
    format!(
        "XP into current level: {:?}/{} XP",
        state.xp_into_level, state.xp_to_next_level
    )
}

/// Full three-line report: level, XP into level, progress bar
pub fn render_report(total_xp: f64, state: &ProgressionState, style: ReportStyle) -> String {
    let bar = if style.colored {
        render_progress_bar_styled(state.xp_into_level, state.xp_to_next_level, style.bar_width)
    } else {
        render_progress_bar(state.xp_into_level, state.xp_to_next_level, style.bar_width)
    };
    format!("{}\n{}\n{}", level_summary(total_xp, state), xp_summary(state), bar)
}
