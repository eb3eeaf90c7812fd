//! sp - exam revision planner
//!
//! CLI entry point: loads subjects, ranks them and prints a study schedule.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use studyplan::cli::{Cli, Command, OutputFormat, parse_hours};
use studyplan::config::Config;
use studyplan::report::{self, rule};
use studyplan::{PlanError, Planner, Subject, SubjectStatistics, load_subjects};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log to file so report output on stdout stays clean
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("studyplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        "studyplan loaded config: subjects={}, max_days={}",
        config.subjects_path.display(),
        config.planner.max_days
    );

    match cli.command {
        Command::Plan {
            subjects,
            hours,
            date,
            format,
        } => cmd_plan(&config, subjects.as_deref(), hours, date, format),
        Command::Rank {
            subjects,
            date,
            format,
        } => cmd_rank(&config, subjects.as_deref(), date, format),
        Command::Subjects { subjects } => cmd_subjects(&config, subjects.as_deref()),
        Command::Stats { subjects } => cmd_stats(&config, subjects.as_deref()),
    }
}

/// Wrap a planning error, pointing at the subject file when its content is at fault
fn plan_failure(err: PlanError, action: String) -> eyre::Report {
    let data_error = err.is_data_error();
    let report = eyre::Report::new(err).wrap_err(action);
    if data_error {
        report.wrap_err("Invalid subject data, fix the subject file and retry")
    } else {
        report
    }
}

fn read_subjects(config: &Config, path: Option<&Path>) -> Result<Vec<Subject>> {
    let path = path.unwrap_or(config.subjects_path.as_path());
    load_subjects(path).map_err(|e| plan_failure(e, format!("Failed to load subjects from {}", path.display())))
}

fn reference_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Ask once for the daily budget
fn prompt_hours() -> Result<f64> {
    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
    let readline = rl.readline(&format!("{} ", "How many hours can you study per day? (e.g. 3):".bright_green()));
    match readline {
        Ok(line) => parse_hours(&line).map_err(|e| eyre::eyre!(e)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(eyre::eyre!("No daily budget given")),
        Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
    }
}

fn cmd_plan(
    config: &Config,
    subjects_path: Option<&Path>,
    hours: Option<f64>,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    let subjects = read_subjects(config, subjects_path)?;
    let hours_per_day = match hours.or(config.hours_per_day) {
        Some(h) => h,
        None => prompt_hours()?,
    };
    let reference = reference_date(date);

    let planner = Planner::new(config.planner.clone())?;
    let plan = planner
        .plan(&subjects, hours_per_day, reference)
        .map_err(|e| plan_failure(e, "Failed to generate schedule".to_string()))?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print!("{}", report::render_priorities(&plan.subjects));

    if plan.schedule.is_empty() {
        println!("{} Could not generate a plan with the given constraints", "✗".red());
        return Ok(());
    }

    print!("{}", report::render_schedule(&plan.schedule));
    print!("{}", report::render_summary(&plan.summary));
    println!();
    println!("{} Plan generated", "✓".green());
    println!("{}", rule('='));
    Ok(())
}

fn cmd_rank(config: &Config, subjects_path: Option<&Path>, date: Option<NaiveDate>, format: OutputFormat) -> Result<()> {
    let subjects = read_subjects(config, subjects_path)?;
    let planner = Planner::new(config.planner.clone())?;
    let ranked = planner
        .rank(&subjects, reference_date(date))
        .map_err(|e| plan_failure(e, "Failed to rank subjects".to_string()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        OutputFormat::Text => print!("{}", report::render_priorities(&ranked)),
    }
    Ok(())
}

fn cmd_subjects(config: &Config, subjects_path: Option<&Path>) -> Result<()> {
    let subjects = read_subjects(config, subjects_path)?;
    if subjects.is_empty() {
        println!("No subjects found");
        return Ok(());
    }
    println!("{} {} subjects loaded", "✓".green(), subjects.len());
    print!("{}", report::render_subjects(&subjects));
    Ok(())
}

fn cmd_stats(config: &Config, subjects_path: Option<&Path>) -> Result<()> {
    let subjects = read_subjects(config, subjects_path)?;
    if subjects.is_empty() {
        println!("No subjects found");
        return Ok(());
    }
    let stats = SubjectStatistics::compute(&subjects)?;
    print!("{}", report::render_statistics(&stats));
    Ok(())
}
