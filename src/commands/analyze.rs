//! Prefix analysis command
//!
//! Classifies every next letter after a given prefix.

use crate::core::{GameConfig, Letter, Lexicon};
use crate::game::Participant;
use crate::solver::outcome::{MoveClassification, classify_children, select_move};
use rand::Rng;
use rustc_hash::FxHashMap;

/// Result of analyzing a prefix
pub struct AnalysisResult {
    pub prefix: String,
    pub mover: Participant,
    pub moves: Vec<MoveClassification>,
    pub recommended: Option<MoveClassification>,
    pub tally: FxHashMap<&'static str, usize>,
}

/// Analyze the moves available after `prefix`
///
/// The mover is whoever would be due at that length under the configured turn order.
///
/// # Errors
///
/// Returns an error if:
/// - The prefix contains characters outside a-z
/// - No dictionary word starts with the prefix
/// - The prefix already ends the game
pub fn analyze_prefix<R: Rng + ?Sized>(
    prefix: &str,
    lexicon: &Lexicon,
    config: &GameConfig,
    rng: &mut R,
) -> Result<AnalysisResult, String> {
    let prefix = prefix.trim().to_lowercase();

    if let Some(bad) = prefix.chars().find(|&c| Letter::from_char(c).is_err()) {
        return Err(format!("Invalid prefix: '{bad}' is not a letter from a-z"));
    }

    let position = lexicon
        .walk(&prefix)
        .ok_or_else(|| format!("No dictionary word starts with '{prefix}'"))?;

    let node = lexicon.node(position);
    if node.is_word_end() && node.depth() >= config.min_word_length() {
        return Err(format!("'{prefix}' is already a complete word"));
    }

    let moves = classify_children(lexicon, position, config);
    if moves.is_empty() {
        return Err(format!("'{prefix}' cannot be extended"));
    }

    let recommended = select_move(&moves, rng);

    let mut tally = FxHashMap::default();
    for m in &moves {
        *tally.entry(m.outcome.label()).or_insert(0) += 1;
    }

    Ok(AnalysisResult {
        mover: Participant::at_turn(prefix.len(), config),
        prefix,
        moves,
        recommended,
        tally,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Outcome;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["carts", "career", "cat", "dog", "doge"])
    }

    #[test]
    fn analyze_valid_prefix() {
        let lexicon = lexicon();
        let mut rng = StdRng::seed_from_u64(0);
        let result = analyze_prefix("car", &lexicon, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(result.prefix, "car");
        assert_eq!(result.moves.len(), 2);
        assert_eq!(result.recommended.unwrap().letter.as_char(), 't');
        assert_eq!(result.recommended.unwrap().outcome, Outcome::Win);
        assert_eq!(result.tally.get("win"), Some(&1));
        assert_eq!(result.tally.get("loss"), Some(&1));
        assert_eq!(result.tally.values().sum::<usize>(), 2);
    }

    #[test]
    fn analyze_normalizes_prefix() {
        let lexicon = lexicon();
        let mut rng = StdRng::seed_from_u64(0);
        let result = analyze_prefix(" CAR ", &lexicon, &GameConfig::default(), &mut rng).unwrap();
        assert_eq!(result.prefix, "car");
    }

    #[test]
    fn analyze_empty_prefix_is_opening() {
        let lexicon = lexicon();
        let mut rng = StdRng::seed_from_u64(0);
        let result = analyze_prefix("", &lexicon, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(result.mover, Participant::Human(1));
        assert_eq!(result.moves.len(), 2);
    }

    #[test]
    fn analyze_unknown_prefix() {
        let lexicon = lexicon();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(analyze_prefix("cx", &lexicon, &GameConfig::default(), &mut rng).is_err());
        assert!(analyze_prefix("c4", &lexicon, &GameConfig::default(), &mut rng).is_err());
    }

    #[test]
    fn analyze_finished_prefix() {
        let lexicon = lexicon();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(analyze_prefix("doge", &lexicon, &GameConfig::default(), &mut rng).is_err());
        assert!(analyze_prefix("cat", &lexicon, &GameConfig::default(), &mut rng).is_err());
    }

    #[test]
    fn mover_follows_turn_order() {
        let lexicon = lexicon();
        let config = GameConfig::new(2, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let result = analyze_prefix("ca", &lexicon, &config, &mut rng).unwrap();
        assert_eq!(result.mover, Participant::Computer);
    }
}
