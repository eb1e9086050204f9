use crate::registry::{providers, Benchmark, CapabilityTier};
use crate::report::RankingReport;
use crate::scoring::{self, ScoreColumn};
use crate::types::entry::ModelEntry;

pub fn to_text(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Telco Leaderboard ranked by {} ({} entries)\n",
        report.context,
        report.entries.len()
    ));
    output.push_str(&format!("source: {}\n\n", report.source));

    if report.entries.is_empty() {
        output.push_str("no entries have a score in this context\n");
        return output;
    }

    let model_width = report
        .entries
        .iter()
        .map(|ranked| ranked.entry.model.len())
        .max()
        .unwrap_or(0)
        .max("MODEL".len());
    let provider_width = report
        .entries
        .iter()
        .map(|ranked| ranked.entry.provider.len())
        .max()
        .unwrap_or(0)
        .max("PROVIDER".len());

    output.push_str(&format!(
        "{:>4}  {:<model_width$}  {:<provider_width$}  {:>8}  {:>6}\n",
        "RANK", "MODEL", "PROVIDER", "SCORE", "+/-"
    ));
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
            "{:>4}  {:<model_width$}  {:<provider_width$}  {:>8}  {:>6}\n",
            ranked.rank, ranked.entry.model, ranked.entry.provider, score, error
        ));
    }

    output
}

/// Per-model breakdown for the `show` subcommand.
pub fn model_detail(entry: &ModelEntry) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", entry.model, entry.provider));
    if let Some(date) = &entry.date {
        output.push_str(&format!("  date:     {date}\n"));
    }
    output.push_str(&format!(
        "  color:    {}\n",
        providers::color(&entry.provider)
    ));
    if let Some(logo) = providers::logo(&entry.provider) {
        output.push_str(&format!("  logo:     {logo}\n"));
    }
    output.push('\n');

    for bench in Benchmark::ALL {
        if let Some(score) = entry.scores.get(&bench) {
            let error = score.std_err.unwrap_or_else(|| {
                scoring::synthetic_error(score.value, ScoreColumn::Benchmark(bench))
            });
            output.push_str(&format!(
                "  {:<10} {:>7.2} +/- {:.2}\n",
                bench.as_str(),
                score.value,
                error
            ));
        }
    }
    if let Some(mean) = entry.mean {
        output.push_str(&format!("  {:<10} {:>7.2}\n", "mean", mean));
    }
    match entry.tci {
        Some(tci) => {
            let error = entry
                .tci_stderr
                .unwrap_or_else(|| scoring::synthetic_error(tci, ScoreColumn::Tci));
            output.push_str(&format!(
                "  {:<10} {:>7.0} +/- {:.2} [{}]\n",
                "tci",
                tci,
                error,
                CapabilityTier::of(tci).as_str()
            ));
        }
        None => {
            output.push_str("  tci        not derived (insufficient benchmark scores)\n");
        }
    }

    output
}
