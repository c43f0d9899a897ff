use std::path::PathBuf;

use clap::Parser;
use json_replace::Direction;

/// json-replace - swap working and committed values in JSON files
#[derive(Parser, Debug)]
#[command(name = "json-replace")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Config is read from --config, else $JSON_REPLACE_CONFIG, else .json-replace.yaml."
)]
pub struct Cli {
    /// Direction of replacement: to_committed or to_working
    #[arg(long)]
    pub direction: Direction,

    /// Path to the YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff for every changed file
    #[arg(long)]
    pub diff: bool,

    /// Exit with status 1 when any file was (or would be) modified
    #[arg(long)]
    pub check: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors and failed files
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Restrict processing to these files (as passed by pre-commit)
    pub files: Vec<PathBuf>,
}
