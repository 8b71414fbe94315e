//! XP gauge
//!
//! Renders progress toward the next level as a fixed-width bar of filled
//! and empty marks followed by a percentage.

use crossterm::style::Stylize;

/// Bar width used when none is given
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Mark for completed progress
pub const FILLED_MARK: char = '█';

/// Mark for the remaining track
pub const EMPTY_MARK: char = '-';

/// A progress bar measured against its width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub width: usize,
    /// Number of filled marks, never more than `width`
    pub filled: usize,
    /// Progress as a percentage in `[0, 100]`
    pub percentage: f64,
}

impl Gauge {
    pub fn new(xp_into_level: f64, xp_to_next_level: f64, width: usize) -> Self {
        let progress = clamped_progress(xp_into_level, xp_to_next_level);
        let filled = ((width as f64 * progress).floor() as usize).min(width);
        Self {
            width,
            filled,
            percentage: progress * 100.0,
        }
    }

    pub fn empty(&self) -> usize {
        self.width - self.filled
    }

    /// Bar as plain text
    pub fn bar(&self) -> String {
        format!("{}{}", filled_marks(self.filled), empty_marks(self.empty()))
    }

    /// Bar with ANSI colors: cyan fill on a dark grey track
    pub fn styled_bar(&self) -> String {
        format!(
            "{}{}",
            filled_marks(self.filled).cyan(),
            empty_marks(self.empty()).dark_grey()
        )
    }
}

fn filled_marks(count: usize) -> String {
    FILLED_MARK.to_string().repeat(count)
}

fn empty_marks(count: usize) -> String {
    EMPTY_MARK.to_string().repeat(count)
}

/// Progress ratio clamped to `[0, 1]`; degenerate thresholds read as no progress
fn clamped_progress(xp_into_level: f64, xp_to_next_level: f64) -> f64 {
    if xp_to_next_level.is_nan() || xp_to_next_level <= 0.0 {
        return 0.0;
    }
    let progress = xp_into_level / xp_to_next_level;
    if progress.is_nan() {
        log::warn!(
            "Cannot render progress for {}/{} XP",
            xp_into_level,
            xp_to_next_level
        );
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Render the progress line in plain text
pub fn render_progress_bar(xp_into_level: f64, xp_to_next_level: f64, width: usize) -> String {
    let gauge = Gauge::new(xp_into_level, xp_to_next_level, width);
    progress_line(&gauge.bar(), gauge.percentage)
}

/// Render the progress line with a colored bar
pub fn render_progress_bar_styled(
    xp_into_level: f64,
    xp_to_next_level: f64,
    width: usize,
) -> String {
    let gauge = Gauge::new(xp_into_level, xp_to_next_level, width);
    progress_line(&gauge.styled_bar(), gauge.percentage)
}

fn progress_line(bar: &str, percentage: f64) -> String {
    format!("Progress towards next level: |{}| {:.1}%", bar, percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_bar() {
        assert_eq!(
            render_progress_bar(0.0, 500.0, DEFAULT_BAR_WIDTH),
            "Progress towards next level: |--------------------| 0.0%"
        );
    }

    #[test]
    fn test_half_bar() {
        let gauge = Gauge::new(250.0, 500.0, 20);
        assert_eq!(gauge.filled, 10);
        assert_eq!(gauge.empty(), 10);
        assert_eq!(
            render_progress_bar(250.0, 500.0, 20),
            "Progress towards next level: |██████████----------| 50.0%"
        );
    }

    #[test]
    fn test_filled_length_truncates() {
        // 293 / 19000 of 20 marks is 0.3
        let gauge = Gauge::new(293.0, 19000.0, 20);
        assert_eq!(gauge.filled, 0);
        assert_relative_eq!(gauge.percentage, 1.542_105_263_157_894_7, epsilon = 1e-12);
        assert!(render_progress_bar(293.0, 19000.0, 20).ends_with("| 1.5%"));

        assert_eq!(Gauge::new(499.0, 500.0, 20).filled, 19);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let over = Gauge::new(750.0, 500.0, 20);
        assert_eq!(over.filled, 20);
        assert_eq!(over.empty(), 0);
        assert_eq!(over.percentage, 100.0);

        let under = Gauge::new(-10.0, 500.0, 20);
        assert_eq!(under.filled, 0);
        assert_eq!(under.percentage, 0.0);
    }

    #[test]
    fn test_degenerate_threshold() {
        assert_eq!(Gauge::new(10.0, 0.0, 20).filled, 0);
        assert_eq!(Gauge::new(10.0, -5.0, 20).filled, 0);
        assert_eq!(Gauge::new(f64::NAN, 500.0, 20).filled, 0);
    }

    #[test]
    fn test_bar_width_is_fixed() {
        for width in [1, 7, 20, 64] {
            for into in [0.0, 1.0, 137.5, 250.0, 499.9] {
                let bar = Gauge::new(into, 500.0, width).bar();
                assert_eq!(bar.chars().count(), width, "{} XP at width {}", into, width);
            }
        }
    }

    #[test]
    fn test_styled_bar_keeps_marks() {
        let styled = render_progress_bar_styled(250.0, 500.0, 20);
        assert_eq!(styled.matches(FILLED_MARK).count(), 10);
        assert!(styled.ends_with("| 50.0%"));
    }
}
