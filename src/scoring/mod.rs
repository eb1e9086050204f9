use crate::registry::{Benchmark, DEFAULT_BASE_ERROR, TCI_BASE_ERROR};
use crate::types::config::ScoringParams;
use crate::types::entry::ModelEntry;

/// Bounds for the normalized probability fed to the logit transform.
/// Keeps the transform away from the degenerate 0/1 endpoints.
const LOGIT_FLOOR: f64 = 0.01;
const LOGIT_CEIL: f64 = 0.99;

/// A rankable score column: the capability index, the benchmark mean, or
/// one individual benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColumn {
    Tci,
    Mean,
    Benchmark(Benchmark),
}

impl ScoreColumn {
    pub fn label(self) -> &'static str {
        match self {
            ScoreColumn::Tci => "tci",
            ScoreColumn::Mean => "mean",
            ScoreColumn::Benchmark(bench) => bench.as_str(),
        }
    }

    fn base_error(self) -> f64 {
        match self {
            ScoreColumn::Tci => TCI_BASE_ERROR,
            ScoreColumn::Mean => DEFAULT_BASE_ERROR,
            ScoreColumn::Benchmark(bench) => bench.base_error(),
        }
    }
}

/// Derive the capability index from the composite-eligible benchmark
/// scores, weighted by each benchmark's difficulty and discrimination.
///
/// Returns `None` when fewer than `min_scores_required` composite scores
/// are present; under-evaluated models get no index rather than a skewed
/// one. The arithmetic matches the published leaderboard exactly,
/// including the additive offset inside the weighted term.
pub fn capability_index(entry: &ModelEntry, params: &ScoringParams) -> Option<f64> {
    let present: Vec<_> = Benchmark::COMPOSITE
        .iter()
        .filter_map(|&bench| {
            let profile = bench.irt_profile()?;
            let value = entry.score(bench)?;
            Some((profile, value))
        })
        .collect();
    if present.len() < params.min_scores_required {
        return None;
    }

    let mut total_weight = 0.0;
    let mut weighted_capability = 0.0;
    for (profile, value) in present {
        let probability = (value / 100.0).clamp(LOGIT_FLOOR, LOGIT_CEIL);
        let logit = (probability / (1.0 - probability)).ln();
        // difficulty is stored as ease-of-benchmark; inverting it gives the
        // harder benchmarks the larger weight
        let hardness = 1.0 - profile.difficulty;
        let weight = hardness * profile.slope;
        weighted_capability += (logit + hardness * 2.0) * weight;
        total_weight += weight;
    }

    let raw_capability = weighted_capability / total_weight;
    let tci = params.base_score + raw_capability * params.scale_factor;
    Some((tci * 10.0).round() / 10.0)
}

/// Display-only uncertainty estimate for columns without a dataset-supplied
/// standard error. Lower scores read as less certain. Not a statistical
/// confidence interval.
pub fn synthetic_error(score: f64, column: ScoreColumn) -> f64 {
    let base = column.base_error();
    (base * (1.0 + (100.0 - score) / 200.0) * 100.0).round() / 100.0
}

/// Fill in missing capability indices across a snapshot. A dataset-supplied
/// index is kept; local derivation only covers the gaps.
pub fn apply_capability_index(entries: &mut [ModelEntry], params: &ScoringParams) {
    for entry in entries.iter_mut() {
        if entry.tci.is_none() {
            entry.tci = capability_index(entry, params);
        }
    }
}
