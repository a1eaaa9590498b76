//! Mirror Judge - command-line entry point
//!
//! Judges one solution file against one problem file and reports the
//! verdict through both stdout and the process exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mirror_judge::core::{JudgeConfig, JudgeError};
use mirror_judge::judge_files;
use mirror_judge::verify::Verdict;

/// Judge a laser-and-mirrors puzzle solution
#[derive(Parser, Debug)]
#[command(name = "mirror-judge")]
#[command(about = "Check a mirror placement against a laser puzzle board")]
struct Args {
    /// Problem board file
    problem: PathBuf,

    /// Candidate solution board file
    solution: PathBuf,

    /// TOML file overriding the laser entry point or step limit
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Log each verification stage to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct Report {
    code: i32,
    status: &'static str,
    message: String,
    mirrors: Option<usize>,
    budget: Option<i64>,
    steps: Option<usize>,
    crystals_cleared: Option<usize>,
}

impl Report {
    fn from_outcome(outcome: &Result<Verdict, JudgeError>) -> Self {
        match outcome {
            Ok(verdict) => Self {
                code: 0,
                status: "ok",
                message: "OK".to_string(),
                mirrors: Some(verdict.mirrors),
                budget: Some(verdict.budget),
                steps: Some(verdict.trace.steps()),
                crystals_cleared: Some(verdict.trace.cleared.len()),
            },
            Err(err) => Self {
                code: err.exit_code(),
                status: "error",
                message: err.to_string(),
                mirrors: None,
                budget: None,
                steps: None,
                crystals_cleared: None,
            },
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                // Usage is not a verdict: print it and leave the error codes alone
                _ => println!("{}", Args::command().render_usage()),
            }
            return ExitCode::SUCCESS;
        }
    };

    let directive = if args.verbose { "mirror_judge=debug" } else { "mirror_judge=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = run(&args);
    if let Err(err) = &outcome {
        tracing::warn!(code = err.exit_code(), "solution rejected: {}", err);
    }

    let report = Report::from_outcome(&outcome);
    match args.format.as_str() {
        "json" => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize report: {}", e),
        },
        "text" => print_text(&report),
        _ => {
            eprintln!("Unknown format '{}', defaulting to text", args.format);
            print_text(&report);
        }
    }

    // Codes are 0..=5, always representable
    ExitCode::from(report.code as u8)
}

fn run(args: &Args) -> Result<Verdict, JudgeError> {
    let config = match &args.config {
        Some(path) => JudgeConfig::load(path)?,
        None => JudgeConfig::default(),
    };
    tracing::debug!(?config, problem = ?args.problem, solution = ?args.solution, "judging");
    judge_files(&args.problem, &args.solution, config)
}

fn print_text(report: &Report) {
    if report.code == 0 {
        println!("{}", report.message);
    } else {
        println!("Error {}: {}", report.code, report.message);
    }
}
