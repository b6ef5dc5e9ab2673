//! Formatting utilities for terminal output

use crate::solver::{MoveClassification, Outcome};

/// Short marker for an outcome
#[must_use]
pub const fn outcome_symbol(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "✅",
        Outcome::Uncertain { .. } => "❔",
        Outcome::Loss { .. } => "❌",
        Outcome::NoWordBelow => "➖",
        Outcome::DeadEnd => "⛔",
    }
}

/// One-line detail for a classified move
#[must_use]
pub fn outcome_detail(m: &MoveClassification) -> String {
    match m.outcome {
        Outcome::Win => format!("forced win ({} completions)", m.counts.total()),
        Outcome::Uncertain {
            matching,
            mismatching,
        } => format!("{matching} favourable / {mismatching} unfavourable"),
        Outcome::Loss { max_depth } => format!("forced loss, lasts until length {max_depth}"),
        Outcome::NoWordBelow => "no qualifying word below".to_string(),
        Outcome::DeadEnd => "nothing continues".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing the share of favourable completions for a move
#[must_use]
pub fn odds_bar(outcome: &Outcome, width: usize) -> String {
    let ratio = match outcome {
        Outcome::Win => 1.0,
        Outcome::Uncertain { .. } => outcome.win_ratio().unwrap_or(0.0),
        _ => 0.0,
    };
    create_progress_bar(ratio, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, NodeId};
    use crate::solver::ParityCounts;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn odds_bar_by_outcome() {
        assert_eq!(odds_bar(&Outcome::Win, 4), "████");
        assert_eq!(odds_bar(&Outcome::Loss { max_depth: 6 }, 4), "░░░░");
        let even = Outcome::Uncertain {
            matching: 1,
            mismatching: 1,
        };
        assert_eq!(odds_bar(&even, 4), "██░░");
    }

    #[test]
    fn detail_mentions_counts() {
        let m = MoveClassification {
            letter: Letter::from_char('t').unwrap(),
            node: NodeId::ROOT,
            counts: ParityCounts {
                matching: 2,
                mismatching: 3,
                deepest: Some(7),
            },
            outcome: Outcome::Uncertain {
                matching: 2,
                mismatching: 3,
            },
        };
        assert_eq!(outcome_detail(&m), "2 favourable / 3 unfavourable");
    }
}
