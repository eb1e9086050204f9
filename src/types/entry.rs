use crate::registry::Benchmark;
use serde::Serialize;
use std::collections::BTreeMap;

/// One per-benchmark measurement. `std_err` is present only when the
/// dataset supplied a genuine standard error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkScore {
    pub value: f64,
    pub std_err: Option<f64>,
}

/// One evaluated model/provider pairing, built once per snapshot and
/// immutable afterwards. Absent benchmark scores are absent, never zero.
#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    pub model: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub scores: BTreeMap<Benchmark, BenchmarkScore>,
    /// Arithmetic mean over present benchmark values only.
    pub mean: Option<f64>,
    /// Capability index: dataset-supplied when available, otherwise the
    /// locally derived value. Absent for under-evaluated models.
    pub tci: Option<f64>,
    pub tci_stderr: Option<f64>,
}

impl ModelEntry {
    pub fn score(&self, bench: Benchmark) -> Option<f64> {
        self.scores.get(&bench).map(|score| score.value)
    }

    pub fn std_err(&self, bench: Benchmark) -> Option<f64> {
        self.scores.get(&bench).and_then(|score| score.std_err)
    }
}

/// A `ModelEntry` placed in a specific ranking context. `score` and
/// `display_error` are absent only for the alphabetical context.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    #[serde(flatten)]
    pub entry: ModelEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_error: Option<f64>,
}
