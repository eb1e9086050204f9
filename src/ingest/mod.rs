use crate::error::{LeaderboardError, Result};
use crate::fetch::dataset::{DatasetResponse, RowEnvelope};
use crate::registry::{providers, Benchmark};
use crate::types::entry::{BenchmarkScore, ModelEntry};
use regex::Regex;
use std::collections::BTreeMap;
use tracing::warn;

/// Turns raw dataset rows into typed model entries.
pub struct Normalizer {
    model_pattern: Regex,
}

/// All entries that normalized cleanly, plus the count of rows that did not.
#[derive(Debug)]
pub struct NormalizedSnapshot {
    pub entries: Vec<ModelEntry>,
    pub skipped: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            model_pattern: Regex::new(r"^(.+?)\s*\(([^)]+)\)$")
                .expect("model pattern should compile"),
        }
    }

    /// Normalize every row in a snapshot. Malformed rows are skipped and
    /// counted, never fatal; the caller decides how to surface them.
    pub fn normalize_response(&self, response: &DatasetResponse) -> NormalizedSnapshot {
        let mut entries = Vec::with_capacity(response.rows.len());
        let mut skipped = 0;
        for envelope in &response.rows {
            match self.normalize_row(envelope) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    warn!(row = envelope.row_idx, %err, "skipping malformed row");
                    skipped += 1;
                }
            }
        }
        NormalizedSnapshot { entries, skipped }
    }

    pub fn normalize_row(&self, envelope: &RowEnvelope) -> Result<ModelEntry> {
        let row = &envelope.row;
        let combined = row
            .model
            .as_deref()
            .map(str::trim)
            .filter(|combined| !combined.is_empty())
            .ok_or_else(|| LeaderboardError::MalformedRow {
                index: envelope.row_idx,
                reason: "missing model field".to_string(),
            })?;
        let (model, provider) = self.parse_identity(combined);

        let mut scores = BTreeMap::new();
        for bench in Benchmark::ALL {
            if let Some((value, std_err, _)) = row.cell(bench) {
                scores.insert(bench, BenchmarkScore { value, std_err });
            }
        }

        let mean = mean_score(&scores);
        let (tci, tci_stderr) = match row.tci {
            Some((value, std_err, _)) => (Some(value), std_err),
            None => (None, None),
        };

        Ok(ModelEntry {
            model,
            provider,
            date: row.date.clone(),
            scores,
            mean,
            tci,
            tci_stderr,
        })
    }

    /// Split a combined `"<name> (<provider>)"` identifier. Identifiers
    /// without a parenthesized suffix keep the whole string as the model
    /// name and get the `Unknown` provider sentinel.
    fn parse_identity(&self, combined: &str) -> (String, String) {
        match self.model_pattern.captures(combined) {
            Some(caps) => {
                let model = caps[1].trim().to_string();
                let provider = providers::normalize_name(&caps[2]);
                (model, provider)
            }
            None => (
                combined.to_string(),
                providers::UNKNOWN_PROVIDER.to_string(),
            ),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn mean_score(scores: &BTreeMap<Benchmark, BenchmarkScore>) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.values().map(|score| score.value).sum();
    Some(sum / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::dataset::DatasetRow;

    fn envelope(row: DatasetRow) -> RowEnvelope {
        RowEnvelope {
            row_idx: 0,
            row,
            truncated_cells: Vec::new(),
        }
    }

    fn row(model: Option<&str>) -> DatasetRow {
        DatasetRow {
            model: model.map(str::to_string),
            teleqna: None,
            telelogs: None,
            telemath: None,
            tsg: None,
            teletables: None,
            tci: None,
            date: None,
        }
    }

    #[test]
    fn parses_model_and_provider_from_combined_string() {
        let normalizer = Normalizer::new();
        let entry = normalizer
            .normalize_row(&envelope(row(Some("gpt-5.2 (OpenAI)"))))
            .expect("row should normalize");
        assert_eq!(entry.model, "gpt-5.2");
        assert_eq!(entry.provider, "OpenAI");
    }

    #[test]
    fn provider_is_canonicalized_case_insensitively() {
        let normalizer = Normalizer::new();
        let entry = normalizer
            .normalize_row(&envelope(row(Some("granite-4 (ibm granite)"))))
            .expect("row should normalize");
        assert_eq!(entry.provider, "IBM Granite");
    }

    #[test]
    fn missing_provider_suffix_falls_back_to_unknown() {
        let normalizer = Normalizer::new();
        let entry = normalizer
            .normalize_row(&envelope(row(Some("mystery-model"))))
            .expect("row should normalize");
        assert_eq!(entry.model, "mystery-model");
        assert_eq!(entry.provider, "Unknown");
    }

    #[test]
    fn missing_model_field_is_a_malformed_row() {
        let normalizer = Normalizer::new();
        let err = normalizer
            .normalize_row(&envelope(row(None)))
            .expect_err("row should be rejected");
        assert!(err.to_string().contains("missing model field"));

        let err = normalizer
            .normalize_row(&envelope(row(Some("   "))))
            .expect_err("blank model should be rejected");
        assert!(err.to_string().contains("missing model field"));
    }

    #[test]
    fn malformed_rows_are_skipped_and_counted() {
        let normalizer = Normalizer::new();
        let response = DatasetResponse {
            rows: vec![
                envelope(row(Some("model-a (Google)"))),
                envelope(row(None)),
                envelope(row(Some("model-b (Meta)"))),
            ],
        };
        let normalized = normalizer.normalize_response(&response);
        assert_eq!(normalized.entries.len(), 2);
        assert_eq!(normalized.skipped, 1);
    }

    #[test]
    fn null_cells_stay_absent_and_mean_skips_them() {
        let normalizer = Normalizer::new();
        let mut raw = row(Some("model-a (Google)"));
        raw.teleqna = Some((80.0, Some(1.2), Some(10000.0)));
        raw.telemath = Some((60.0, None, Some(500.0)));
        let entry = normalizer
            .normalize_row(&envelope(raw))
            .expect("row should normalize");

        assert_eq!(entry.score(Benchmark::Teleqna), Some(80.0));
        assert_eq!(entry.std_err(Benchmark::Teleqna), Some(1.2));
        assert_eq!(entry.score(Benchmark::Telemath), Some(60.0));
        assert_eq!(entry.std_err(Benchmark::Telemath), None);
        assert_eq!(entry.score(Benchmark::Telelogs), None);
        assert_eq!(entry.mean, Some(70.0));
    }

    #[test]
    fn mean_is_absent_without_any_scores() {
        let normalizer = Normalizer::new();
        let entry = normalizer
            .normalize_row(&envelope(row(Some("model-a (Google)"))))
            .expect("row should normalize");
        assert!(entry.mean.is_none());
    }

    #[test]
    fn precomputed_tci_passes_through() {
        let normalizer = Normalizer::new();
        let mut raw = row(Some("model-a (Google)"));
        raw.tci = Some((141.2, Some(1.8), Some(0.0)));
        let entry = normalizer
            .normalize_row(&envelope(raw))
            .expect("row should normalize");
        assert_eq!(entry.tci, Some(141.2));
        assert_eq!(entry.tci_stderr, Some(1.8));
    }
}
