pub mod providers;

use serde::Serialize;
use std::fmt;

/// Closed set of benchmark columns published by the leaderboard dataset.
///
/// The dataset encodes 3GPP-TSG under the wire name `3gpp_tsg`; everywhere
/// else the short key `tsg` is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Benchmark {
    Teleqna,
    Telelogs,
    Telemath,
    Tsg,
    Teletables,
}

/// IRT-style parameters for one composite-eligible benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrtProfile {
    /// Stored as ease-of-benchmark: higher value = easier benchmark.
    pub difficulty: f64,
    /// Discrimination: higher value = more discriminating.
    pub slope: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
        }
    }
}

impl Benchmark {
    pub const ALL: [Benchmark; 5] = [
        Benchmark::Teleqna,
        Benchmark::Telelogs,
        Benchmark::Telemath,
        Benchmark::Tsg,
        Benchmark::Teletables,
    ];

    /// Benchmarks that feed the capability index. TeleTables uses a
    /// different evaluation methodology and is excluded.
    pub const COMPOSITE: [Benchmark; 4] = [
        Benchmark::Teleqna,
        Benchmark::Telelogs,
        Benchmark::Telemath,
        Benchmark::Tsg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Benchmark::Teleqna => "teleqna",
            Benchmark::Telelogs => "telelogs",
            Benchmark::Telemath => "telemath",
            Benchmark::Tsg => "tsg",
            Benchmark::Teletables => "teletables",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Benchmark::Teleqna => "TeleQnA",
            Benchmark::Telelogs => "TeleLogs",
            Benchmark::Telemath => "TeleMath",
            Benchmark::Tsg => "3GPP-TSG",
            Benchmark::Teletables => "TeleTables",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Benchmark::Teleqna => {
                "10,000 Q&A pairs testing telecom knowledge across lexicon, research, and standards."
            }
            Benchmark::Telelogs => {
                "Root cause analysis for 5G network throughput degradation across 8 failure modes."
            }
            Benchmark::Telemath => {
                "Mathematical reasoning in telecommunications: signal processing, network optimization."
            }
            Benchmark::Tsg => {
                "Classification of technical documents by 3GPP working group (RAN, SA, CT)."
            }
            Benchmark::Teletables => {
                "Interpretation of structured tables drawn from telecom standards and reports."
            }
        }
    }

    pub fn samples(self) -> Option<&'static str> {
        match self {
            Benchmark::Teleqna => Some("10,000"),
            Benchmark::Telelogs => Some("1,000+"),
            Benchmark::Telemath => Some("500"),
            Benchmark::Tsg => Some("5,000+"),
            Benchmark::Teletables => None,
        }
    }

    pub fn tier(self) -> Option<DifficultyTier> {
        match self {
            Benchmark::Teleqna => Some(DifficultyTier::Medium),
            Benchmark::Telelogs => Some(DifficultyTier::Hard),
            Benchmark::Telemath => Some(DifficultyTier::Hard),
            Benchmark::Tsg => Some(DifficultyTier::Medium),
            Benchmark::Teletables => None,
        }
    }

    pub fn paper_link(self) -> Option<&'static str> {
        match self {
            Benchmark::Teleqna => Some("https://arxiv.org/abs/2310.15051"),
            Benchmark::Telelogs => Some("https://arxiv.org/abs/2507.21974"),
            Benchmark::Telemath => Some("https://arxiv.org/abs/2506.10674"),
            Benchmark::Tsg | Benchmark::Teletables => None,
        }
    }

    pub fn dataset_link(self) -> Option<&'static str> {
        match self {
            Benchmark::Teleqna => Some("https://huggingface.co/datasets/netop/TeleQnA"),
            Benchmark::Telelogs => Some("https://huggingface.co/datasets/netop/TeleLogs"),
            Benchmark::Telemath => Some("https://huggingface.co/datasets/netop/TeleMath"),
            Benchmark::Tsg => Some("https://huggingface.co/datasets/eaguaida/gsma_sample"),
            Benchmark::Teletables => None,
        }
    }

    /// Difficulties estimated from average scores (lower average = harder);
    /// slopes express how sharply each benchmark separates ability levels.
    pub fn irt_profile(self) -> Option<IrtProfile> {
        match self {
            Benchmark::Teleqna => Some(IrtProfile {
                difficulty: 0.7,
                slope: 1.2,
            }),
            Benchmark::Telelogs => Some(IrtProfile {
                difficulty: 0.3,
                slope: 1.5,
            }),
            Benchmark::Telemath => Some(IrtProfile {
                difficulty: 0.4,
                slope: 1.3,
            }),
            Benchmark::Tsg => Some(IrtProfile {
                difficulty: 0.4,
                slope: 1.2,
            }),
            Benchmark::Teletables => None,
        }
    }

    /// Seed value for synthetic error-bar magnitudes.
    pub fn base_error(self) -> f64 {
        match self {
            Benchmark::Teleqna => 1.5,
            Benchmark::Telelogs => 3.6,
            Benchmark::Telemath => 2.8,
            Benchmark::Tsg => 2.4,
            Benchmark::Teletables => DEFAULT_BASE_ERROR,
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base error for the pre-computed capability index column.
pub const TCI_BASE_ERROR: f64 = 1.8;

/// Base error for score columns without a configured seed.
pub const DEFAULT_BASE_ERROR: f64 = 2.0;

/// Qualitative capability-index band, cut at the published thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityTier {
    High,
    Good,
    Medium,
    Lower,
}

impl CapabilityTier {
    pub fn of(tci: f64) -> Self {
        if tci >= 135.0 {
            CapabilityTier::High
        } else if tci >= 125.0 {
            CapabilityTier::Good
        } else if tci >= 115.0 {
            CapabilityTier::Medium
        } else {
            CapabilityTier::Lower
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityTier::High => "high",
            CapabilityTier::Good => "good",
            CapabilityTier::Medium => "medium",
            CapabilityTier::Lower => "lower",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_set_excludes_teletables() {
        assert!(!Benchmark::COMPOSITE.contains(&Benchmark::Teletables));
        assert_eq!(Benchmark::COMPOSITE.len(), 4);
    }

    #[test]
    fn every_composite_benchmark_has_an_irt_profile() {
        for bench in Benchmark::COMPOSITE {
            let profile = bench.irt_profile().expect("composite profile should exist");
            assert!((0.0..1.0).contains(&profile.difficulty));
            assert!(profile.slope > 0.0);
        }
        assert!(Benchmark::Teletables.irt_profile().is_none());
    }

    #[test]
    fn base_errors_are_positive() {
        for bench in Benchmark::ALL {
            assert!(bench.base_error() > 0.0);
        }
    }

    #[test]
    fn capability_tier_thresholds() {
        assert_eq!(CapabilityTier::of(140.0), CapabilityTier::High);
        assert_eq!(CapabilityTier::of(135.0), CapabilityTier::High);
        assert_eq!(CapabilityTier::of(130.0), CapabilityTier::Good);
        assert_eq!(CapabilityTier::of(118.3), CapabilityTier::Medium);
        assert_eq!(CapabilityTier::of(101.0), CapabilityTier::Lower);
    }

    #[test]
    fn benchmark_keys_serialize_lowercase() {
        let json = serde_json::to_string(&Benchmark::Tsg).expect("key should serialize");
        assert_eq!(json, "\"tsg\"");
    }
}
