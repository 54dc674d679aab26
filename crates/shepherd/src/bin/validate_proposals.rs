//! CLI entry point: validate a directory of proposal documents.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use shepherd::{scan, CorpusReport, ValidationContext};

#[derive(Parser)]
#[command(
    name = "validate-proposals",
    version,
    about = "Validate the structure and metadata of a proposal corpus"
)]
struct Cli {
    /// Corpus directory to scan for *.md files
    dir: PathBuf,

    /// Treat unknown status tokens as errors
    #[arg(long)]
    strict: bool,

    /// Skip the cross-reference pass
    #[arg(long)]
    no_references: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One `path:line: <ErrorKind>: <message>` line per finding
    Text,
    /// The full report as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) if report.has_errors() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<CorpusReport> {
    let ctx = ValidationContext {
        strict: cli.strict,
        check_references: !cli.no_references,
    };

    let report = scan(&cli.dir, &ctx)
        .with_context(|| format!("scanning corpus at {}", cli.dir.display()))?;

    match cli.format {
        Format::Text => print_text(&report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report)
}

fn print_text(report: &CorpusReport) {
    for file in &report.files {
        for line in file.render_lines() {
            println!("{line}");
        }
    }
    println!(
        "{} files checked: {} errors, {} warnings ({} files invalid)",
        report.files.len(),
        report.error_count(),
        report.warning_count(),
        report.invalid_files()
    );
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
