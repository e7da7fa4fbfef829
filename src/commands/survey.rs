//! Survey command
//!
//! Draws many targets at every bit width and checks that they stay inside the
//! generation interval and cover it evenly.

use crate::config::QuizConfig;
use crate::core::BitWidth;
use crate::engine::random_target;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Sampling results for one bit width
#[derive(Debug, Clone)]
pub struct WidthSurvey {
    pub width: BitWidth,
    pub samples: usize,
    pub min: u32,
    pub max: u32,
    pub out_of_range: usize,
    /// Number of distinct targets seen
    pub distinct: usize,
    /// Size of the generation interval
    pub range_size: usize,
    /// Shannon entropy of the observed targets, in bits
    pub entropy: f64,
    pub counts: FxHashMap<u32, usize>,
}

impl WidthSurvey {
    /// Entropy of a perfectly uniform draw over the interval
    #[must_use]
    pub fn max_entropy(&self) -> f64 {
        (self.range_size as f64).log2()
    }

    /// Observed entropy as a percentage of the uniform maximum
    #[must_use]
    pub fn uniformity(&self) -> f64 {
        let max = self.max_entropy();
        if max > 0.0 {
            self.entropy / max * 100.0
        } else {
            0.0
        }
    }

    /// Every value of the interval was drawn at least once
    #[must_use]
    pub fn full_coverage(&self) -> bool {
        self.distinct == self.range_size
    }

    /// Group the drawn targets into at most `buckets` equal slices of the interval
    ///
    /// Bins are contiguous, cover the whole interval and are listed from the
    /// smallest value up. The last bin may be narrower than the others.
    #[must_use]
    pub fn histogram(&self, buckets: usize) -> Vec<HistogramBin> {
        let range = self.width.target_range();
        let (lo, hi) = (*range.start(), *range.end());
        let size = hi - lo + 1;
        let buckets = u32::try_from(buckets).unwrap_or(u32::MAX).clamp(1, size);
        let step = size.div_ceil(buckets);

        (lo..=hi)
            .step_by(step as usize)
            .map(|start| {
                let end = (start + step - 1).min(hi);
                let count = (start..=end)
                    .map(|value| self.counts.get(&value).copied().unwrap_or(0))
                    .sum();
                HistogramBin { start, end, count }
            })
            .collect()
    }
}

/// One bar of a survey histogram: targets in `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBin {
    pub start: u32,
    pub end: u32,
    pub count: usize,
}

/// Results for every bit width
#[derive(Debug)]
pub struct SurveyResult {
    pub widths: Vec<WidthSurvey>,
    pub duration: Duration,
}

impl SurveyResult {
    /// No target fell outside its interval at any width
    #[must_use]
    pub fn all_in_range(&self) -> bool {
        self.widths.iter().all(|w| w.out_of_range == 0)
    }
}

/// Sample `count` targets at every width, one generator stream per width
///
/// Widths are surveyed in parallel. With a seed in `config` the result is
/// reproducible.
pub fn run_survey(config: &QuizConfig, count: usize, show_progress: bool) -> SurveyResult {
    let widths: Vec<BitWidth> = BitWidth::all().collect();
    let total = progress_total(count, widths.len());

    let pb = if show_progress {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<WidthSurvey> = widths
        .par_iter()
        .map(|&width| {
            let survey = survey_width(config, width, count);
            pb.inc(count as u64);
            survey
        })
        .collect();

    pb.finish_with_message("Complete!");

    SurveyResult {
        widths: results,
        duration: start.elapsed(),
    }
}

/// Total number of draws across all widths, saturating for huge counts
fn progress_total(count: usize, widths: usize) -> u64 {
    (count as u64).saturating_mul(widths as u64)
}

fn survey_width(config: &QuizConfig, width: BitWidth, count: usize) -> WidthSurvey {
    let mut rng = config.stream_rng(u64::from(width.get()));
    let range = width.target_range();

    let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
    let mut min = u32::MAX;
    let mut max = 0;
    let mut out_of_range = 0;

    for _ in 0..count {
        let target = random_target(&mut rng, width);
        if !range.contains(&target) {
            out_of_range += 1;
        }
        min = min.min(target);
        max = max.max(target);
        *counts.entry(target).or_insert(0) += 1;
    }

    if count == 0 {
        min = 0;
    }

    WidthSurvey {
        width,
        samples: count,
        min,
        max,
        out_of_range,
        distinct: counts.len(),
        range_size: (range.end() - range.start() + 1) as usize,
        entropy: shannon_entropy(&counts),
        counts,
    }
}

/// Shannon entropy of a value distribution
///
/// H = -Σ p * log₂(p)
///
/// # Examples
/// ```
/// use binary_quiz::commands::survey::shannon_entropy;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// for value in 3..=6u32 {
///     uniform.insert(value, 25);
/// }
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 0.001);
/// ```
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<u32, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
