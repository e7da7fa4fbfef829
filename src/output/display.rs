//! Display functions for command results

use super::formatters::{bit_cells, create_progress_bar, histogram_lines};
use crate::commands::{ConvertResult, SurveyResult};
use colored::Colorize;

/// Print the result of converting a value
pub fn print_convert_result(result: &ConvertResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Decimal {} at {}",
        result.input.bright_yellow().bold(),
        result.width
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n   Binary:   {}", result.binary.bright_white().bold());
    println!("   Grouped:  {}", result.grouped);
    println!("   Cells:    {}", bit_cells(&result.grouped).bright_cyan());

    if !result.fits {
        println!(
            "\n   {}",
            format!(
                "Needs {} digits; wider than {}",
                result.binary.len(),
                result.width
            )
            .yellow()
        );
    }
    println!();
}

const HISTOGRAM_BUCKETS: usize = 8;

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "TARGET SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    println!(
        "\n   {:<8} {:>8} {:>6} {:>6} {:>10}  {}",
        "Width", "Samples", "Min", "Max", "Coverage", "Uniformity"
    );

    for w in &result.widths {
        let coverage = format!("{}/{}", w.distinct, w.range_size);
        let coverage = if w.full_coverage() {
            coverage.green()
        } else {
            coverage.yellow()
        };
        let bar = create_progress_bar(w.uniformity(), 100.0, 20);

        println!(
            "   {:<8} {:>8} {:>6} {:>6} {:>10}  {} {:5.1}%",
            w.width.to_string(),
            w.samples,
            w.min,
            w.max,
            coverage,
            bar.green(),
            w.uniformity()
        );
    }

    println!("\n   {}", "Distribution".bright_cyan().bold());
    for w in &result.widths {
        println!("\n   {}", w.width.to_string().bold());
        for line in histogram_lines(&w.histogram(HISTOGRAM_BUCKETS), 30) {
            println!("   {}", line.cyan());
        }
    }

    println!();
    if result.all_in_range() {
        println!("{}", "✅ Every target inside its interval".green().bold());
    } else {
        let bad: usize = result.widths.iter().map(|w| w.out_of_range).sum();
        println!(
            "{}",
            format!("❌ {bad} targets outside their interval").red().bold()
        );
    }
    println!("   Time taken: {:.2}s\n", result.duration.as_secs_f64());
}
