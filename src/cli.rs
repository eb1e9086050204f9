use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "telcoboard",
    version,
    about = "Telco LLM benchmark leaderboard: fetch, score, and rank"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the leaderboard snapshot by a scoring context
    Rank(RankCommand),
    /// Show the full breakdown for one model
    Show(ShowCommand),
    /// List the benchmark registry
    Benchmarks,
    /// List the canonical provider registry
    Providers,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RankContext {
    Tci,
    Mean,
    Teleqna,
    Telelogs,
    Telemath,
    Tsg,
    Teletables,
    Name,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Args)]
pub struct RankCommand {
    /// Scoring context for the ranking
    #[arg(long, value_enum, default_value = "tci")]
    pub by: RankContext,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Keep only the first N ranked entries
    #[arg(long)]
    pub limit: Option<usize>,

    /// Read the snapshot from a local JSON file instead of fetching
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the dataset endpoint
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,
}

#[derive(Args)]
pub struct ShowCommand {
    /// Model name (case-insensitive)
    pub model: String,

    /// Read the snapshot from a local JSON file instead of fetching
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the dataset endpoint
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,
}
