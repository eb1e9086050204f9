mod cli;
mod config;
mod error;
mod fetch;
mod ingest;
mod ranking;
mod registry;
mod report;
mod scoring;
mod types;

use crate::error::{LeaderboardError, Result};
use crate::fetch::dataset::DatasetResponse;
use crate::ranking::RankBy;
use crate::scoring::ScoreColumn;
use crate::types::config::LeaderboardConfig;
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let loaded = config::load_config(Path::new("."))?;
            let params = loaded
                .as_ref()
                .map(LeaderboardConfig::scoring_params)
                .unwrap_or_default();

            let (snapshot, source) = load_snapshot(&cmd.input, &cmd.url, loaded.as_ref())?;
            let normalized = ingest::Normalizer::new().normalize_response(&snapshot);
            let mut entries = normalized.entries;
            scoring::apply_capability_index(&mut entries, &params);

            let by = rank_context(cmd.by);
            let mut ranked = ranking::rank(&entries, by);
            if let Some(limit) = cmd.limit {
                ranked.truncate(limit);
            }

            let empty = ranked.is_empty();
            let report = report::RankingReport::new(by, &source, ranked);
            let rendered = report::render(&report, output_format(cmd.format))?;
            println!("{rendered}");

            if normalized.skipped > 0 {
                eprintln!("warning: {} malformed row(s) skipped", normalized.skipped);
            }
            if normalized.skipped > 0 || empty {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Show(cmd) => {
            let loaded = config::load_config(Path::new("."))?;
            let params = loaded
                .as_ref()
                .map(LeaderboardConfig::scoring_params)
                .unwrap_or_default();

            let (snapshot, _) = load_snapshot(&cmd.input, &cmd.url, loaded.as_ref())?;
            let normalized = ingest::Normalizer::new().normalize_response(&snapshot);
            let mut entries = normalized.entries;
            scoring::apply_capability_index(&mut entries, &params);

            let entry = entries
                .iter()
                .find(|entry| entry.model.eq_ignore_ascii_case(&cmd.model))
                .ok_or_else(|| LeaderboardError::UnknownModel(cmd.model.clone()))?;
            print!("{}", report::text::model_detail(entry));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Benchmarks => {
            for bench in registry::Benchmark::ALL {
                let tier = bench
                    .tier()
                    .map(|tier| tier.as_str())
                    .unwrap_or("-");
                let samples = bench.samples().unwrap_or("-");
                println!(
                    "{:<11} {:<11} {:<7} {} samples",
                    bench.as_str(),
                    bench.title(),
                    tier,
                    samples
                );
                println!("  {}", bench.description());
                if let Some(paper) = bench.paper_link() {
                    println!("  paper:   {paper}");
                }
                if let Some(dataset) = bench.dataset_link() {
                    println!("  dataset: {dataset}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Providers => {
            for provider in registry::providers::PROVIDERS {
                println!(
                    "{:<13} {}  {}",
                    provider.name,
                    provider.color,
                    provider.logo.unwrap_or("-")
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn load_snapshot(
    input: &Option<PathBuf>,
    url_flag: &Option<String>,
    cfg: Option<&LeaderboardConfig>,
) -> Result<(DatasetResponse, String)> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(LeaderboardError::InputNotFound(
                    path.display().to_string(),
                ));
            }
            Ok((fetch::read_snapshot(path)?, path.display().to_string()))
        }
        None => {
            let url = url_flag
                .clone()
                .or_else(|| cfg.and_then(|cfg| cfg.dataset_url().map(str::to_string)))
                .unwrap_or_else(|| fetch::DEFAULT_DATASET_URL.to_string());
            let snapshot = fetch::fetch_snapshot(&url)?;
            Ok((snapshot, url))
        }
    }
}

fn rank_context(context: cli::RankContext) -> RankBy {
    match context {
        cli::RankContext::Tci => RankBy::Score(ScoreColumn::Tci),
        cli::RankContext::Mean => RankBy::Score(ScoreColumn::Mean),
        cli::RankContext::Teleqna => RankBy::Score(ScoreColumn::Benchmark(registry::Benchmark::Teleqna)),
        cli::RankContext::Telelogs => {
            RankBy::Score(ScoreColumn::Benchmark(registry::Benchmark::Telelogs))
        }
        cli::RankContext::Telemath => {
            RankBy::Score(ScoreColumn::Benchmark(registry::Benchmark::Telemath))
        }
        cli::RankContext::Tsg => RankBy::Score(ScoreColumn::Benchmark(registry::Benchmark::Tsg)),
        cli::RankContext::Teletables => {
            RankBy::Score(ScoreColumn::Benchmark(registry::Benchmark::Teletables))
        }
        cli::RankContext::Name => RankBy::Name,
    }
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
