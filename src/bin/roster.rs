//! CLI tool for inspecting and maintaining a roster file.
//!
//! # Usage
//!
//! ```bash
//! # Validate every record and report failures
//! cargo run --bin roster -- check
//!
//! # List the students of a specific file
//! cargo run --bin roster -- --file data/roster.json list
//!
//! # Rewrite the roster in canonical form
//! cargo run --bin roster -- normalize --output data/clean.json
//! ```
//!
//! # Environment Variables
//!
//! - `ROSTER_FILE`: roster path used when `--file` is not given
//! - `RUST_LOG`, `LOG_FORMAT`: logging

use student_roster::application::services::RosterService;
use student_roster::config;
use student_roster::domain::entities::{FieldValue, Student};
use student_roster::domain::repositories::RosterStorage;
use student_roster::infrastructure::persistence::JsonRosterStorage;
use student_roster::telemetry::init_tracing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing a student roster file.
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Roster file (defaults to ROSTER_FILE or data/roster.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every record and report the ones that fail
    Check,

    /// List all students
    List,

    /// Load the roster and write it back in canonical form
    Normalize {
        /// Destination file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let path = cli.file.unwrap_or(config.roster_file);
    let storage = JsonRosterStorage::new(path);

    match cli.command {
        Commands::Check => check(&storage)?,
        Commands::List => list(storage)?,
        Commands::Normalize { output, yes } => normalize(storage, output, yes)?,
    }

    Ok(())
}

/// Materializes each record independently and reports its outcome.
///
/// # Output Format
///
/// ```text
/// Checking data/roster.json
///
///   #0   OK    A0123456X
///   #1   FAIL  Person's StudentEmail field is missing!
///
///   Valid: 1  Invalid: 1
/// ```
fn check(storage: &JsonRosterStorage) -> Result<()> {
    println!(
        "{} {}",
        "Checking".bright_blue().bold(),
        storage.path().display()
    );
    println!();

    let roster = storage
        .read_records()
        .with_context(|| format!("Failed to read {}", storage.path().display()))?;

    let Some(roster) = roster else {
        println!("{}", "  No roster file found".yellow());
        return Ok(());
    };

    let mut invalid = 0usize;
    let outcomes = roster.materialize_each();

    for (index, outcome) in outcomes.iter().enumerate() {
        let position = format!("#{index}");
        match outcome {
            Ok(student) => println!(
                "  {:<4} {}  {}",
                position.bright_black(),
                "OK  ".green(),
                student.student_id().as_str().cyan()
            ),
            Err(e) => {
                invalid += 1;
                println!("  {:<4} {}  {}", position.bright_black(), "FAIL".red(), e);
            }
        }
    }

    println!();
    println!(
        "  Valid: {}  Invalid: {}",
        (outcomes.len() - invalid).to_string().bright_green().bold(),
        invalid.to_string().bright_red().bold()
    );

    if invalid > 0 {
        anyhow::bail!("{invalid} invalid record(s) in {}", storage.path().display());
    }

    Ok(())
}

/// Prints every student as a table.
fn list(storage: JsonRosterStorage) -> Result<()> {
    let service = RosterService::new(Arc::new(storage));
    let students = service.load().context("Failed to load roster")?;

    println!("{}", "Students".bright_blue().bold());
    println!();

    if students.is_empty() {
        println!("{}", "  No students found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<30} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Group".bright_white().bold()
    );
    println!("  {}", "-".repeat(79).bright_black());

    for student in &students {
        print_student(student);
    }

    println!();
    println!(
        "  Total: {}",
        students.len().to_string().bright_white().bold()
    );

    Ok(())
}

fn print_student(student: &Student) {
    println!(
        "  {:<10} {:<30} {:<30} {:<6}",
        student.student_id().as_str().cyan(),
        student.name().as_str(),
        student.email().as_str().bright_black(),
        student.tutorial_group().as_str()
    );
}

/// Loads the roster and saves it to `output`, or back in place.
///
/// Loading is all-or-nothing: a single invalid record aborts the rewrite, and
/// so does a missing input file.
fn normalize(storage: JsonRosterStorage, output: Option<PathBuf>, skip_confirm: bool) -> Result<()> {
    let source = storage.path().to_path_buf();
    let Some(students) = storage
        .read_roster()
        .with_context(|| format!("Failed to load {}", source.display()))?
    else {
        anyhow::bail!("Roster file {} does not exist", source.display());
    };

    let target = output.unwrap_or_else(|| source.clone());

    if target == source && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", source.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    RosterService::new(Arc::new(JsonRosterStorage::new(&target)))
        .save(&students)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!(
        "{} {} student(s) written to {}",
        "Done:".green().bold(),
        students.len(),
        target.display()
    );

    Ok(())
}
