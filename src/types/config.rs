use crate::error::LeaderboardError;
use crate::registry::Benchmark;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LeaderboardConfig {
    pub dataset: Option<DatasetConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub min_scores_required: Option<usize>,
    pub base_score: Option<f64>,
    pub scale_factor: Option<f64>,
}

/// Resolved capability-index parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    /// Minimum composite-eligible scores before an index is derived.
    pub min_scores_required: usize,
    pub base_score: f64,
    pub scale_factor: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            min_scores_required: 3,
            base_score: 115.0,
            scale_factor: 20.0,
        }
    }
}

impl LeaderboardConfig {
    pub fn dataset_url(&self) -> Option<&str> {
        self.dataset
            .as_ref()
            .and_then(|dataset| dataset.url.as_deref())
    }

    pub fn scoring_params(&self) -> ScoringParams {
        let defaults = ScoringParams::default();
        match &self.scoring {
            Some(scoring) => ScoringParams {
                min_scores_required: scoring
                    .min_scores_required
                    .unwrap_or(defaults.min_scores_required),
                base_score: scoring.base_score.unwrap_or(defaults.base_score),
                scale_factor: scoring.scale_factor.unwrap_or(defaults.scale_factor),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), LeaderboardError> {
        if let Some(url) = self.dataset_url() {
            if url.trim().is_empty() {
                return Err(LeaderboardError::ConfigParse(
                    "dataset.url must not be empty".to_string(),
                ));
            }
        }

        let params = self.scoring_params();
        if params.min_scores_required == 0 || params.min_scores_required > Benchmark::COMPOSITE.len()
        {
            return Err(LeaderboardError::ConfigParse(format!(
                "scoring.min_scores_required must be between 1 and {} (found {})",
                Benchmark::COMPOSITE.len(),
                params.min_scores_required
            )));
        }
        if !params.scale_factor.is_finite() || params.scale_factor <= 0.0 {
            return Err(LeaderboardError::ConfigParse(
                "scoring.scale_factor must be a positive number".to_string(),
            ));
        }
        if !params.base_score.is_finite() {
            return Err(LeaderboardError::ConfigParse(
                "scoring.base_score must be a finite number".to_string(),
            ));
        }

        Ok(())
    }
}
