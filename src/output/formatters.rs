//! Formatting utilities for terminal output

/// Render a histogram bar of `value` against `max`
#[must_use]
pub fn histogram_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let filled = (value * width / max).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
