use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

mod config;
mod finder;
mod input;
mod report;

use config::Config;
use report::SolveReport;

#[derive(Parser)]
#[command(name = "two-sum")]
#[command(about = "Find the indices of two numbers that sum to a target")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a two-sum instance
    Solve {
        /// Target sum
        #[arg(short, long)]
        target: i64,
        /// The sequence to search (space- or comma-separated numbers)
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
        /// Read the sequence from a file instead of arguments
        #[arg(short, long, conflicts_with = "numbers")]
        file: Option<PathBuf>,
        /// Read the sequence from standard input instead of arguments
        #[arg(long, conflicts_with_all = ["numbers", "file"])]
        stdin: bool,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
        /// Display indices starting at 1
        #[arg(long)]
        one_based: bool,
    },
    /// Show the stored preferences
    Config {
        /// Restore the default preferences
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Solve {
            target,
            numbers,
            file,
            stdin,
            json,
            one_based,
        } => {
            solve(&config, target, numbers, file, stdin, json, one_based)?;
        }
        Commands::Config { reset } => {
            show_config(reset)?;
        }
    }

    Ok(())
}

fn solve(
    config: &Config,
    target: i64,
    numbers: Vec<String>,
    file: Option<PathBuf>,
    stdin: bool,
    json: bool,
    one_based: bool,
) -> Result<()> {
    let sequence = if stdin {
        input::sequence_from_stdin()?
    } else if let Some(path) = file {
        input::sequence_from_file(&path)?
    } else {
        input::parse_sequence(&numbers)?
    };

    let report = SolveReport::new(&sequence, target);

    // Absence of a pair is a normal outcome, so both branches exit 0.
    if json || config.wants_json() {
        println!("{}", report.to_json()?);
    } else {
        report.print_plain(one_based);
    }

    Ok(())
}

fn show_config(reset: bool) -> Result<()> {
    if reset {
        config::reset_config()?;
        println!("{}", "✓ Preferences restored to defaults.".green());
    }

    let config = Config::load()?;
    println!(
        "{} {}",
        "Config file:".bold(),
        config::get_config_path()?.display()
    );
    println!("{} {}", "Default format:".bold(), config.default_format);
    println!("{} {}", "Color:".bold(), config.color);

    Ok(())
}
