//! Formatting utilities for terminal output

use crate::commands::HistogramBin;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render binary digits as lit/unlit cells, e.g. `"0101"` becomes `"○●○●"`
///
/// Characters other than `'0'` and `'1'` (such as group separators) are kept.
#[must_use]
pub fn bit_cells(digits: &str) -> String {
    digits
        .chars()
        .map(|ch| match ch {
            '1' => '●',
            '0' => '○',
            other => other,
        })
        .collect()
}

/// Place values of each digit, most significant first
///
/// ```
/// use binary_quiz::output::formatters::place_values;
///
/// assert_eq!(place_values(4), vec![8, 4, 2, 1]);
/// ```
#[must_use]
pub fn place_values(digits: usize) -> Vec<u64> {
    (0..digits as u32).rev().map(|exp| 1u64 << exp).collect()
}

/// One line per histogram bin: value range, bar scaled to the fullest bin, count
#[must_use]
pub fn histogram_lines(bins: &[HistogramBin], bar_width: usize) -> Vec<String> {
    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;

    bins.iter()
        .map(|b| {
            let label = if b.start == b.end {
                b.start.to_string()
            } else {
                format!("{}-{}", b.start, b.end)
            };
            let bar = create_progress_bar(b.count as f64, peak, bar_width);
            format!("{label:>9} {bar} {}", b.count)
        })
        .collect()
}
