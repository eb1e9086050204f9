pub mod json;
pub mod md;
pub mod text;

use crate::error::LeaderboardError;
use crate::ranking::RankBy;
use crate::scoring::ScoreColumn;
use crate::types::entry::RankedEntry;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

/// One rendered ranking view: the context label, provenance, and the
/// ranked entries.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub version: String,
    pub generated_at: String,
    pub context: String,
    pub source: String,
    pub entries: Vec<RankedEntry>,
    /// Capability-index scores display as integers, everything else with
    /// two decimals.
    #[serde(skip)]
    pub score_decimals: usize,
}

impl RankingReport {
    pub fn new(by: RankBy, source: &str, entries: Vec<RankedEntry>) -> Self {
        let score_decimals = match by {
            RankBy::Score(ScoreColumn::Tci) => 0,
            _ => 2,
        };
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            context: by.label().to_string(),
            source: source.to_string(),
            entries,
            score_decimals,
        }
    }
}

pub fn render(report: &RankingReport, format: OutputFormat) -> Result<String, LeaderboardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(LeaderboardError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Text => Ok(text::to_text(report)),
    }
}
