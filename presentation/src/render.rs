use colored::Colorize;
use domain::classification::ClassificationResult;
use domain::confidence::{score_percent, Tier};

const BAR_WIDTH: usize = 30;

/// Immediate feedback panel for the submission that just settled: tag list,
/// sentiment label and glyph, raw score, and the colored confidence bar.
pub fn result_panel(result: &ClassificationResult) -> String {
    let tags = if result.tags.is_empty() {
        "none".to_string()
    } else {
        result.tags.join(", ")
    };
    let (label, glyph) = match result.sentiment {
        Some(s) => (s.as_str(), s.glyph()),
        None => ("n/a", ""),
    };
    let score = match result.score {
        Some(score) => format!("{score:.3}"),
        None => "n/a".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("Tags:       {tags}\n"));
    out.push_str(&format!("Sentiment:  {label} {glyph}\n"));
    out.push_str(&format!("Score:      {score}\n"));
    out.push_str(&format!("Confidence: {}", confidence_bar(result.score)));
    out
}

/// Bar colored by tier: green above 70%, yellow above 40%, red otherwise.
/// A missing score renders the sentinel with no bar and no tier.
fn confidence_bar(score: Option<f64>) -> String {
    let Some(score) = score else {
        return "n/a".to_string();
    };
    let percent = score_percent(score);
    let filled = (percent as usize * BAR_WIDTH / 100).min(BAR_WIDTH);
    let bar = format!(
        "{}{} {percent}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    );
    match Tier::for_percent(percent) {
        Tier::Good => bar.green().to_string(),
        Tier::Warning => bar.yellow().to_string(),
        Tier::Poor => bar.red().to_string(),
    }
}

/// Categorical bar surface over ordered (label, count) pairs. Each call
/// rebuilds the whole chart; printing it replaces the previous rendering
/// of the surface.
pub fn bar_chart(title: &str, pairs: &[(String, u64)]) -> String {
    let mut lines = vec![title.bold().to_string()];
    if pairs.is_empty() {
        lines.push("  (no data yet)".to_string());
        return lines.join("\n");
    }

    let max = pairs.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let width = pairs.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (label, count) in pairs {
        let filled = (*count as usize * BAR_WIDTH / max as usize).min(BAR_WIDTH);
        lines.push(format!(
            "  {label:<width$}  {} {count}",
            "█".repeat(filled).blue()
        ));
    }
    lines.join("\n")
}

/// Proportional surface over the fixed-order sentiment counts, colored to
/// match the categories (positive green, neutral yellow, negative red).
pub fn sentiment_chart(pairs: &[(&'static str, u64); 3]) -> String {
    let total: u64 = pairs.iter().map(|(_, c)| *c).sum();
    let mut lines = vec!["Sentiment distribution".bold().to_string()];
    for (label, count) in pairs {
        let share = if total == 0 {
            0
        } else {
            (*count as usize * BAR_WIDTH) / total as usize
        };
        let bar = "█".repeat(share);
        let bar = match *label {
            "positive" => bar.green(),
            "neutral" => bar.yellow(),
            _ => bar.red(),
        };
        lines.push(format!("  {label:<8}  {bar} {count}"));
    }
    lines.join("\n")
}
