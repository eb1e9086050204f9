use crate::scoring::{self, ScoreColumn};
use crate::types::entry::{ModelEntry, RankedEntry};
use std::cmp::Ordering;

/// Ranking context: a numeric score column, or alphabetical by model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Score(ScoreColumn),
    Name,
}

impl RankBy {
    pub fn label(self) -> &'static str {
        match self {
            RankBy::Score(column) => column.label(),
            RankBy::Name => "name",
        }
    }
}

fn column_value(entry: &ModelEntry, column: ScoreColumn) -> Option<f64> {
    match column {
        ScoreColumn::Tci => entry.tci,
        ScoreColumn::Mean => entry.mean,
        ScoreColumn::Benchmark(bench) => entry.score(bench),
    }
}

fn column_std_err(entry: &ModelEntry, column: ScoreColumn) -> Option<f64> {
    match column {
        ScoreColumn::Tci => entry.tci_stderr,
        ScoreColumn::Mean => None,
        ScoreColumn::Benchmark(bench) => entry.std_err(bench),
    }
}

/// Produce the dense-ranked view for one context. Entries without a score
/// in the context are excluded; the sort is stable, so equal scores keep
/// their snapshot order. Ranks run 1..=N with no gaps and no sharing.
pub fn rank(entries: &[ModelEntry], by: RankBy) -> Vec<RankedEntry> {
    match by {
        RankBy::Name => rank_by_name(entries),
        RankBy::Score(column) => rank_by_score(entries, column),
    }
}

fn rank_by_name(entries: &[ModelEntry]) -> Vec<RankedEntry> {
    let mut sorted: Vec<&ModelEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.model.cmp(&b.model));
    sorted
        .into_iter()
        .enumerate()
        .map(|(position, entry)| RankedEntry {
            rank: position as u32 + 1,
            entry: entry.clone(),
            score: None,
            display_error: None,
        })
        .collect()
}

fn rank_by_score(entries: &[ModelEntry], column: ScoreColumn) -> Vec<RankedEntry> {
    let mut scored: Vec<(&ModelEntry, f64)> = entries
        .iter()
        .filter_map(|entry| {
            column_value(entry, column)
                .filter(|value| value.is_finite())
                .map(|value| (entry, value))
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(position, (entry, value))| {
            let display_error = column_std_err(entry, column)
                .unwrap_or_else(|| scoring::synthetic_error(value, column));
            RankedEntry {
                rank: position as u32 + 1,
                entry: entry.clone(),
                score: Some(value),
                display_error: Some(display_error),
            }
        })
        .collect()
}
