//! json-replace CLI - swap working and committed values in JSON files
//!
//! Usage: json-replace --direction <to_committed|to_working> [--config PATH] [FILES...]
//!
//! Typically installed as a git pre-commit hook: `to_committed` before a
//! commit, `to_working` after checkout.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use json_replace::config::{resolve_config_path, Config};
use json_replace::presentation::{
    create_renderer, create_replace_use_case, render_config_warnings, OutputFormat,
    ReportRenderer,
};
use json_replace::ReplaceOptions;

mod cli;

use cli::Cli;

/// Exit status when at least one matched file could not be processed
const EXIT_FILE_ERRORS: u8 = 2;

/// Exit status for `--check` when something was modified
const EXIT_MODIFIED: u8 = 1;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    run(&cli)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config_path = resolve_config_path(cli.config.as_deref());
    let (config, warnings) = Config::load_with_warnings(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    if !cli.json {
        eprint!("{}", render_config_warnings(&config_path, &warnings));
    }
    let config = config.with_env_overrides()?;

    let options = ReplaceOptions {
        dry_run: cli.dry_run,
        diff: cli.diff,
        root: PathBuf::new(),
        only: (!cli.files.is_empty()).then(|| cli.files.clone()),
        ..ReplaceOptions::new(cli.direction)
    };

    let use_case = create_replace_use_case(config);
    let report = use_case.execute(&options)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    print!(
        "{}",
        create_renderer(format, cli.verbose, cli.quiet).render(&report, cli.direction)
    );

    if !report.is_success() {
        return Ok(ExitCode::from(EXIT_FILE_ERRORS));
    }
    if cli.check && report.modified() > 0 {
        return Ok(ExitCode::from(EXIT_MODIFIED));
    }
    Ok(ExitCode::SUCCESS)
}
