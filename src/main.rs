//! Binary Quiz - CLI
//!
//! Guess the decimal value of random binary numbers, in a TUI or on the
//! command line.

use anyhow::Result;
use binary_quiz::{
    commands::{convert_value, run_simple, run_survey},
    config::QuizConfig,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::{print_convert_result, print_survey_result},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "binary_quiz",
    about = "Binary number quiz: read the bits, answer in decimal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bit width of the targets (4-10)
    #[arg(short, long, global = true, default_value_t = 5)]
    bits: u8,

    /// Fix RNG seed for reproducible targets (e.g., --seed 12345)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Append log output to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based quiz without TUI)
    Simple,

    /// Show the padded binary form of a decimal value
    Convert {
        /// Decimal value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Sample targets at every bit width and check their range and spread
    Survey {
        /// Number of targets drawn per width
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = if matches!(command, Commands::Play) {
        LogTarget::Silent
    } else {
        LogTarget::Stderr
    };
    init_tracing(cli.log_file.as_deref(), log_target)?;

    let config = QuizConfig::new(cli.bits, cli.seed)?;
    if let Some(seed) = config.seed {
        tracing::info!(seed, "using fixed seed");
    }

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Convert { value } => run_convert_command(&config, &value),
        Commands::Survey { count } => {
            run_survey_command(&config, count);
            Ok(())
        }
    }
}

fn run_play_command(config: &QuizConfig) -> Result<()> {
    let app = App::new(config.engine());
    let stats = run_tui(app)?;
    println!(
        "Thanks for playing! {} correct out of {} attempts (best streak {}).",
        stats.correct, stats.attempts, stats.best_streak
    );
    Ok(())
}

fn run_simple_command(config: &QuizConfig) -> Result<()> {
    let mut engine = config.engine();
    run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run_convert_command(config: &QuizConfig, value: &str) -> Result<()> {
    let result = convert_value(value, config.bits)?;
    print_convert_result(&result);
    Ok(())
}

fn run_survey_command(config: &QuizConfig, count: usize) {
    println!("Sampling {count} targets at each bit width...");
    let result = run_survey(config, count, true);
    print_survey_result(&result);
}
