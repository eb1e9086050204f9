use crate::report::RankingReport;

pub fn to_markdown(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str("# Telco Leaderboard\n\n");
    output.push_str(&format!(
        "Ranked by `{}`. Source: {}. Generated {}.\n\n",
        report.context, report.source, report.generated_at
    ));

    if report.entries.is_empty() {
        output.push_str("No entries have a score in this context.\n");
        return output;
    }

    let numeric = report.entries.iter().any(|ranked| ranked.score.is_some());
    if numeric {
        output.push_str("| Rank | Model | Provider | Score | Error |\n");
        output.push_str("|-----:|:------|:---------|------:|------:|\n");
        for ranked in &report.entries {
            let score = ranked
                .score
                .map(|value| format!("{:.*}", report.score_decimals, value))
                .unwrap_or_else(|| "-".to_string());
            let error = ranked
                .display_error
                .map(|value| format!("{value:.2}"))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                ranked.rank, ranked.entry.model, ranked.entry.provider, score, error
            ));
        }
    } else {
        output.push_str("| Rank | Model | Provider |\n");
        output.push_str("|-----:|:------|:---------|\n");
        for ranked in &report.entries {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                ranked.rank, ranked.entry.model, ranked.entry.provider
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{rank, RankBy};
    use crate::registry::Benchmark;
    use crate::scoring::ScoreColumn;
    use crate::types::entry::{BenchmarkScore, ModelEntry};
    use std::collections::BTreeMap;

    fn entry(model: &str, teleqna: f64) -> ModelEntry {
        let mut scores = BTreeMap::new();
        scores.insert(
            Benchmark::Teleqna,
            BenchmarkScore {
                value: teleqna,
                std_err: Some(1.1),
            },
        );
        ModelEntry {
            model: model.to_string(),
            provider: "OpenAI".to_string(),
            date: None,
            scores,
            mean: Some(teleqna),
            tci: None,
            tci_stderr: None,
        }
    }

    #[test]
    fn markdown_report_contains_table_rows() {
        let by = RankBy::Score(ScoreColumn::Benchmark(Benchmark::Teleqna));
        let entries = rank(&[entry("gpt-5.2", 73.2), entry("gemini-3", 70.0)], by);
        let report = RankingReport::new(by, "snapshot.json", entries);

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Telco Leaderboard"));
        assert!(rendered.contains("Ranked by `teleqna`"));
        assert!(rendered.contains("| 1 | gpt-5.2 | OpenAI | 73.20 | 1.10 |"));
        assert!(rendered.contains("| 2 | gemini-3 | OpenAI | 70.00 | 1.10 |"));
    }

    #[test]
    fn markdown_name_context_omits_score_columns() {
        let entries = rank(&[entry("gpt-5.2", 73.2)], RankBy::Name);
        let report = RankingReport::new(RankBy::Name, "snapshot.json", entries);

        let rendered = to_markdown(&report);
        assert!(rendered.contains("| Rank | Model | Provider |\n"));
        assert!(!rendered.contains("Score"));
    }

    #[test]
    fn markdown_empty_view_notes_it() {
        let by = RankBy::Score(ScoreColumn::Tci);
        let report = RankingReport::new(by, "snapshot.json", Vec::new());
        let rendered = to_markdown(&report);
        assert!(rendered.contains("No entries have a score in this context."));
    }
}
