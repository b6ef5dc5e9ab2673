//! Opening survey
//!
//! Classifies the best move at every live prefix up to a given length, showing where
//! the player to move already has a forced win.

use crate::core::{GameConfig, Lexicon, NodeId};
use crate::game::Participant;
use crate::solver::Outcome;
use crate::solver::outcome::{classify_children, select_move};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Best move found at one prefix
#[derive(Debug, Clone)]
pub struct OpeningEntry {
    pub prefix: String,
    pub mover: Participant,
    pub letter: char,
    pub outcome: Outcome,
}

/// Statistics from surveying all prefixes
#[derive(Debug)]
pub struct OpeningsSurvey {
    pub max_length: usize,
    pub prefixes_examined: usize,
    pub by_outcome: FxHashMap<&'static str, usize>,
    pub forced_wins: Vec<OpeningEntry>,
    pub duration: Duration,
}

/// Live prefixes of length `0..=max_length`
///
/// A prefix is live when it has not finished the game: it is not a completed word and
/// it can still be extended.
#[must_use]
pub fn live_prefixes(
    lexicon: &Lexicon,
    config: &GameConfig,
    max_length: usize,
) -> Vec<(String, NodeId)> {
    let mut prefixes = Vec::new();
    let mut stack = vec![(String::new(), lexicon.root())];

    while let Some((prefix, id)) = stack.pop() {
        let node = lexicon.node(id);
        let completed = node.is_word_end() && node.depth() >= config.min_word_length();
        if completed || !node.has_children() {
            continue;
        }

        if prefix.len() < max_length {
            for &(letter, child) in node.children().iter().rev() {
                let mut next = prefix.clone();
                next.push(letter.as_char());
                stack.push((next, child));
            }
        }
        prefixes.push((prefix, id));
    }

    prefixes
}

/// Survey every live prefix up to `max_length` letters
///
/// Each prefix uses its own seeded tie-break so the survey is reproducible.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_openings(lexicon: &Lexicon, config: &GameConfig, max_length: usize) -> OpeningsSurvey {
    let start = Instant::now();
    let prefixes = live_prefixes(lexicon, config, max_length);

    println!("🔎 Surveying {} prefixes...", prefixes.len());

    let pb = ProgressBar::new(prefixes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let entries: Vec<OpeningEntry> = prefixes
        .par_iter()
        .enumerate()
        .filter_map(|(idx, (prefix, id))| {
            let moves = classify_children(lexicon, *id, config);
            let mut rng = StdRng::seed_from_u64(idx as u64);
            let chosen = select_move(&moves, &mut rng);
            pb.inc(1);

            chosen.map(|m| OpeningEntry {
                prefix: prefix.clone(),
                mover: Participant::at_turn(prefix.len(), config),
                letter: m.letter.as_char(),
                outcome: m.outcome,
            })
        })
        .collect();

    pb.finish_with_message("done");

    let mut by_outcome: FxHashMap<&'static str, usize> = FxHashMap::default();
    for entry in &entries {
        *by_outcome.entry(entry.outcome.label()).or_insert(0) += 1;
    }

    let forced_wins: Vec<OpeningEntry> = entries
        .into_iter()
        .filter(|e| e.outcome == Outcome::Win)
        .collect();

    log::info!(
        "surveyed {} prefixes, {} forced wins",
        prefixes.len(),
        forced_wins.len()
    );

    OpeningsSurvey {
        max_length,
        prefixes_examined: prefixes.len(),
        by_outcome,
        forced_wins,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_set(lexicon: &Lexicon, max_length: usize) -> Vec<String> {
        live_prefixes(lexicon, &GameConfig::default(), max_length)
            .into_iter()
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn live_prefixes_include_root() {
        let lexicon = Lexicon::from_words(["bath"]);
        assert_eq!(prefix_set(&lexicon, 0), vec![""]);
    }

    #[test]
    fn live_prefixes_stop_at_finished_strings() {
        let lexicon = Lexicon::from_words(["cat", "bath", "bathe"]);
        let prefixes = prefix_set(&lexicon, 5);

        // "cat" is a dead leaf, "bath" completes a word
        assert!(prefixes.contains(&"ca".to_string()));
        assert!(!prefixes.contains(&"cat".to_string()));
        assert!(!prefixes.contains(&"bath".to_string()));
        assert!(!prefixes.contains(&"bathe".to_string()));
        assert!(prefixes.contains(&"bat".to_string()));
    }

    #[test]
    fn live_prefixes_respect_length() {
        let lexicon = Lexicon::from_words(["ghost", "giant"]);
        let prefixes = prefix_set(&lexicon, 2);

        assert!(prefixes.iter().all(|p| p.len() <= 2));
        assert_eq!(prefixes.len(), 4); // "", "g", "gh", "gi"
    }

    #[test]
    fn survey_counts_every_prefix() {
        let lexicon = Lexicon::from_words(["carts", "career", "dog", "doge"]);
        let survey = run_openings(&lexicon, &GameConfig::default(), 3);

        let counted: usize = survey.by_outcome.values().sum();
        assert_eq!(counted, survey.prefixes_examined);
        assert!(survey.forced_wins.iter().any(|e| e.prefix == "car" && e.letter == 't'));
        assert!(
            survey
                .forced_wins
                .iter()
                .all(|e| e.outcome == Outcome::Win)
        );
    }
}
