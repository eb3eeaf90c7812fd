//! CLI command definitions and subcommands

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sp - exam revision planner
#[derive(Parser, Debug)]
#[command(
    name = "sp",
    author,
    version,
    about = "Plan exam revision from subject deadlines, difficulty and priority",
    after_help = "Logs are written to: ~/.local/share/studyplan/logs/studyplan.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank subjects and generate a day-by-day schedule
    Plan {
        /// Subject file (JSON)
        #[arg(short, long)]
        subjects: Option<PathBuf>,

        /// Study hours available per day; prompted for when omitted
        #[arg(short = 'H', long)]
        hours: Option<f64>,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show priority analysis without scheduling
    Rank {
        /// Subject file (JSON)
        #[arg(short, long)]
        subjects: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List loaded subjects
    Subjects {
        /// Subject file (JSON)
        #[arg(short, long)]
        subjects: Option<PathBuf>,
    },

    /// Show totals over the loaded subjects
    Stats {
        /// Subject file (JSON)
        #[arg(short, long)]
        subjects: Option<PathBuf>,
    },
}

/// Output format for plan and rank commands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Parse a daily budget typed at the prompt
pub fn parse_hours(input: &str) -> Result<f64, String> {
    let hours: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("Not a number: {}", input.trim()))?;
    if !(hours.is_finite() && hours > 0.0) {
        return Err("The number of hours must be positive".to_string());
    }
    Ok(hours)
}
