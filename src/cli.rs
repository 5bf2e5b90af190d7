use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "credsweep",
    version,
    about = "Find, classify and risk-score credentials scattered across a filesystem",
    long_about = "credsweep walks a directory tree (and optionally well-known home \
                  locations), extracts credential material from env files, JSON configs, \
                  npm configs, git credential stores and key files, scores each finding, \
                  and flags exposure conditions like git-tracked secrets."
)]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Maximum directory depth to traverse
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Also probe well-known credential locations in the home directory
    #[arg(long)]
    pub include_home: bool,

    /// Skip the git tracked-file check
    #[arg(long)]
    pub no_git: bool,

    /// Print fix suggestions after the report
    #[arg(long)]
    pub fix: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress everything except the report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
