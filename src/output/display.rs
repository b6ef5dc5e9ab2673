//! Display functions for command results

use super::formatters::{odds_bar, outcome_detail, outcome_symbol};
use crate::commands::{AnalysisResult, OpeningsSurvey};
use colored::Colorize;

/// Print the classification of every move after a prefix
pub fn print_analysis_result(result: &AnalysisResult) {
    let shown = if result.prefix.is_empty() {
        "(opening)".to_string()
    } else {
        result.prefix.to_uppercase()
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MOVE ANALYSIS:".bright_cyan().bold(),
        shown.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n{} to move, {} options\n", result.mover, result.moves.len());

    for m in &result.moves {
        let line = format!(
            "  {} {}  [{}] {}",
            outcome_symbol(&m.outcome),
            m.letter.to_string().to_uppercase().bold(),
            odds_bar(&m.outcome, 10),
            outcome_detail(m)
        );
        println!("{line}");
    }

    let mut tally: Vec<_> = result.tally.iter().collect();
    tally.sort_unstable();
    let summary: Vec<String> = tally.iter().map(|(k, v)| format!("{v} {k}")).collect();
    println!("\n📊 {}", summary.join(", "));

    if let Some(m) = result.recommended {
        println!(
            "🎯 Computer would play: {} ({})",
            m.letter.to_string().to_uppercase().bright_green().bold(),
            m.outcome.label()
        );
    }
}

/// Print the opening survey
pub fn print_openings_survey(survey: &OpeningsSurvey, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Best move by prefix:".bright_cyan().bold());
    println!(
        "   Prefixes up to {} letters: {}",
        survey.max_length, survey.prefixes_examined
    );

    let mut by_outcome: Vec<_> = survey.by_outcome.iter().collect();
    by_outcome.sort_unstable_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (label, count) in by_outcome {
        let pct = *count as f64 / survey.prefixes_examined.max(1) as f64 * 100.0;
        println!("   {label:<14} {count:6} ({pct:5.1}%)");
    }
    println!("   Time taken:    {:.2}s", survey.duration.as_secs_f64());

    if survey.forced_wins.is_empty() {
        println!("\n{}", "No forced wins found.".yellow());
        return;
    }

    println!("\n🏆 {}", "Forced wins for the player to move:".bright_cyan().bold());
    for entry in survey.forced_wins.iter().take(limit) {
        let prefix = if entry.prefix.is_empty() {
            "(opening)".to_string()
        } else {
            entry.prefix.to_uppercase()
        };
        println!(
            "   {:<10} {:<10} plays {}",
            prefix,
            entry.mover.to_string(),
            entry.letter.to_ascii_uppercase().to_string().green().bold()
        );
    }
    if survey.forced_wins.len() > limit {
        println!(
            "   {}",
            format!("... and {} more", survey.forced_wins.len() - limit).bright_black()
        );
    }
}
