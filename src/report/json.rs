use crate::report::RankingReport;

pub fn to_json(report: &RankingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{rank, RankBy};
    use crate::registry::Benchmark;
    use crate::scoring::ScoreColumn;
    use crate::types::entry::{BenchmarkScore, ModelEntry};
    use std::collections::BTreeMap;

    #[test]
    fn json_report_contains_context_and_entries() {
        let mut scores = BTreeMap::new();
        scores.insert(
            Benchmark::Teleqna,
            BenchmarkScore {
                value: 73.2,
                std_err: Some(1.1),
            },
        );
        let entry = ModelEntry {
            model: "gpt-5.2".to_string(),
            provider: "OpenAI".to_string(),
            date: None,
            scores,
            mean: Some(73.2),
            tci: None,
            tci_stderr: None,
        };
        let by = RankBy::Score(ScoreColumn::Benchmark(Benchmark::Teleqna));
        let report = RankingReport::new(by, "snapshot.json", rank(&[entry], by));

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"context\": \"teleqna\""));
        assert!(rendered.contains("\"model\": \"gpt-5.2\""));
        assert!(rendered.contains("\"rank\": 1"));
        assert!(rendered.contains("\"teleqna\""));
    }
}
