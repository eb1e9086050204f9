use crate::registry::Benchmark;
use serde::Deserialize;

/// One `[score, stderr, n_samples]` cell as published by the
/// datasets-server. The standard error may be null inside the tuple.
pub type RawCell = (f64, Option<f64>, Option<f64>);

/// Response shape of the datasets-server `/rows` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetResponse {
    pub rows: Vec<RowEnvelope>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RowEnvelope {
    pub row_idx: usize,
    pub row: DatasetRow,
    #[serde(default)]
    pub truncated_cells: Vec<String>,
}

/// One raw leaderboard row. Benchmark cells are null for models that were
/// not evaluated on that benchmark; `tci` carries a pre-computed composite
/// when the dataset supplies one.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRow {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub teleqna: Option<RawCell>,
    #[serde(default)]
    pub telelogs: Option<RawCell>,
    #[serde(default)]
    pub telemath: Option<RawCell>,
    #[serde(rename = "3gpp_tsg", default)]
    pub tsg: Option<RawCell>,
    #[serde(default)]
    pub teletables: Option<RawCell>,
    #[serde(default)]
    pub tci: Option<RawCell>,
    #[serde(default)]
    pub date: Option<String>,
}

impl DatasetRow {
    pub fn cell(&self, bench: Benchmark) -> Option<RawCell> {
        match bench {
            Benchmark::Teleqna => self.teleqna,
            Benchmark::Telelogs => self.telelogs,
            Benchmark::Telemath => self.telemath,
            Benchmark::Tsg => self.tsg,
            Benchmark::Teletables => self.teletables,
        }
    }
}
