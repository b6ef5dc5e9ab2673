//! Outcome classification for candidate moves
//!
//! For every child letter of the current position, counts the completions reachable
//! below it and sorts them by which participant would be forced to play the final
//! letter. Turns cycle strictly among all participants, so a completion `remaining`
//! letters away lands back on the mover exactly when `remaining` is a multiple of the
//! participant count.

use crate::core::{GameConfig, Letter, Lexicon, NodeId};
use rayon::prelude::*;

/// Classified outcome of playing one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every completion below is forced onto another participant
    Win,
    /// Completions exist on both sides
    Uncertain { matching: usize, mismatching: usize },
    /// Every completion below is forced onto the mover
    Loss { max_depth: usize },
    /// Letters continue below but no qualifying word ends there
    NoWordBelow,
    /// Nothing continues below this letter
    DeadEnd,
}

impl Outcome {
    /// Share of completions that favour the mover, for uncertain outcomes only
    #[must_use]
    pub fn win_ratio(&self) -> Option<f64> {
        match *self {
            Self::Uncertain {
                matching,
                mismatching,
            } => Some(matching as f64 / (matching + mismatching) as f64),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Uncertain { .. } => "uncertain",
            Self::Loss { .. } => "loss",
            Self::NoWordBelow => "no word below",
            Self::DeadEnd => "dead end",
        }
    }
}

/// Completion counts below a child, split by parity against the participant count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParityCounts {
    pub matching: usize,
    pub mismatching: usize,
    /// Deepest qualifying word end, `None` when there is none
    pub deepest: Option<usize>,
}

impl ParityCounts {
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.matching + self.mismatching
    }
}

/// A candidate letter with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveClassification {
    pub letter: Letter,
    pub node: NodeId,
    pub counts: ParityCounts,
    pub outcome: Outcome,
}

/// Count the completions below `child` by parity
///
/// `remaining` for a word end `w` is `w.depth - child.depth + 1`, i.e. the number of
/// letters needed to reach it including the move onto `child` itself.
#[must_use]
pub fn count_parity(lexicon: &Lexicon, child: NodeId, config: &GameConfig) -> ParityCounts {
    let participants = config.total_participants();
    let child_depth = lexicon.node(child).depth();

    lexicon
        .collect_word_ends(child, config.search_floor())
        .into_iter()
        .map(|end| lexicon.node(end).depth())
        .fold(ParityCounts::default(), |mut counts, depth| {
            let remaining = depth - child_depth + 1;
            if remaining % participants == 0 {
                counts.matching += 1;
            } else {
                counts.mismatching += 1;
            }
            counts.deepest = Some(counts.deepest.map_or(depth, |d| d.max(depth)));
            counts
        })
}

/// Classify a single child node
///
/// # Panics
/// Panics if `child` is the root, which has no letter.
#[must_use]
pub fn classify_child(lexicon: &Lexicon, child: NodeId, config: &GameConfig) -> MoveClassification {
    let node = lexicon.node(child);
    let letter = node.letter().expect("the root is never a move");
    let counts = count_parity(lexicon, child, config);

    let outcome = match (counts.matching, counts.mismatching, counts.deepest) {
        (0, 0, _) if !node.has_children() => Outcome::DeadEnd,
        (0, 0, _) => Outcome::NoWordBelow,
        (_, 0, _) => Outcome::Win,
        (0, _, Some(max_depth)) => Outcome::Loss { max_depth },
        (matching, mismatching, _) => Outcome::Uncertain {
            matching,
            mismatching,
        },
    };

    log::trace!("classified '{letter}' as {} ({counts:?})", outcome.label());

    MoveClassification {
        letter,
        node: child,
        counts,
        outcome,
    }
}

/// Classify every child of `position`, in child order
///
/// Siblings are independent, so they are classified in parallel.
///
/// # Examples
/// ```
/// use ghost_solver::core::{GameConfig, Lexicon};
/// use ghost_solver::solver::outcome::{Outcome, classify_children};
///
/// let lexicon = Lexicon::from_words(["bath"]);
/// let position = lexicon.walk("ba").unwrap();
///
/// let moves = classify_children(&lexicon, position, &GameConfig::default());
/// assert_eq!(moves.len(), 1);
/// assert_eq!(moves[0].outcome, Outcome::Win);
/// ```
#[must_use]
pub fn classify_children(
    lexicon: &Lexicon,
    position: NodeId,
    config: &GameConfig,
) -> Vec<MoveClassification> {
    let moves: Vec<MoveClassification> = lexicon
        .node(position)
        .children()
        .par_iter()
        .map(|&(_, child)| classify_child(lexicon, child, config))
        .collect();

    if log::log_enabled!(log::Level::Debug) {
        let wins = moves.iter().filter(|m| m.outcome == Outcome::Win).count();
        let losses = moves
            .iter()
            .filter(|m| matches!(m.outcome, Outcome::Loss { .. }))
            .count();
        log::debug!(
            "classified {} moves at depth {}: {} win, {} loss",
            moves.len(),
            lexicon.node(position).depth(),
            wins,
            losses
        );
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_at(words: &[&str], prefix: &str, config: &GameConfig) -> Vec<MoveClassification> {
        let lexicon = Lexicon::from_words(words);
        let position = lexicon.walk(prefix).unwrap();
        classify_children(&lexicon, position, config)
    }

    fn outcome_of(moves: &[MoveClassification], c: char) -> Outcome {
        moves
            .iter()
            .find(|m| m.letter.as_char() == c)
            .map(|m| m.outcome)
            .unwrap()
    }

    #[test]
    fn bat_bath_bathe_is_uncertain() {
        // Only "bath" (2 letters away) and "bathe" (3 letters away) qualify
        let moves = classify_at(&["bat", "bath", "bathe"], "ba", &GameConfig::default());

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].counts.matching, 1);
        assert_eq!(moves[0].counts.mismatching, 1);
        assert_eq!(moves[0].counts.deepest, Some(5));
        assert_eq!(
            moves[0].outcome,
            Outcome::Uncertain {
                matching: 1,
                mismatching: 1
            }
        );
    }

    #[test]
    fn forced_completion_on_opponent_is_win() {
        let moves = classify_at(&["bath"], "ba", &GameConfig::default());
        assert_eq!(outcome_of(&moves, 't'), Outcome::Win);
    }

    #[test]
    fn forced_completion_on_mover_is_loss() {
        let moves = classify_at(&["bathe"], "ba", &GameConfig::default());
        assert_eq!(outcome_of(&moves, 't'), Outcome::Loss { max_depth: 5 });
    }

    #[test]
    fn loss_carries_deepest_completion() {
        // Both completions are an odd number of letters away from 't'
        let moves = classify_at(&["bathe", "batters"], "ba", &GameConfig::default());
        assert_eq!(outcome_of(&moves, 't'), Outcome::Loss { max_depth: 7 });
    }

    #[test]
    fn short_leaf_is_dead_end() {
        let moves = classify_at(&["cat"], "ca", &GameConfig::default());
        assert_eq!(outcome_of(&moves, 't'), Outcome::DeadEnd);
        assert_eq!(moves[0].counts, ParityCounts::default());
    }

    #[test]
    fn short_words_only_is_no_word_below() {
        let moves = classify_at(&["at"], "", &GameConfig::default());
        assert_eq!(outcome_of(&moves, 'a'), Outcome::NoWordBelow);
    }

    #[test]
    fn three_participants_use_modulus_three() {
        let config = GameConfig::new(2, 4).unwrap();
        // Distances 2, 3, 4 from 't' give remainders 2, 0, 1
        let moves = classify_at(&["bath", "bathe", "bathed"], "ba", &config);
        assert_eq!(
            outcome_of(&moves, 't'),
            Outcome::Uncertain {
                matching: 1,
                mismatching: 2
            }
        );
    }

    #[test]
    fn min_word_length_moves_the_floor() {
        // With three-letter words counting, "bat" is one letter away from 't'
        let config = GameConfig::new(1, 3).unwrap();
        let moves = classify_at(&["bat", "bath", "bathe"], "ba", &config);
        assert_eq!(
            outcome_of(&moves, 't'),
            Outcome::Uncertain {
                matching: 1,
                mismatching: 2
            }
        );
    }

    #[test]
    fn children_are_classified_in_order() {
        let moves = classify_at(&["dog", "cart", "bath"], "", &GameConfig::default());
        let letters: Vec<char> = moves.iter().map(|m| m.letter.as_char()).collect();
        assert_eq!(letters, vec!['d', 'c', 'b']);
    }

    #[test]
    fn classification_is_deterministic() {
        let words = ["ghost", "ghoul", "giant", "gift", "gild", "gilded", "glow"];
        let lexicon = Lexicon::from_words(words);
        let config = GameConfig::default();

        let first = classify_children(&lexicon, lexicon.root(), &config);
        for _ in 0..10 {
            assert_eq!(classify_children(&lexicon, lexicon.root(), &config), first);
        }
    }

    #[test]
    fn leaf_position_has_no_moves() {
        let moves = classify_at(&["bath"], "bath", &GameConfig::default());
        assert!(moves.is_empty());
    }

    #[test]
    fn win_ratio_only_for_uncertain() {
        let uncertain = Outcome::Uncertain {
            matching: 3,
            mismatching: 1,
        };
        assert!((uncertain.win_ratio().unwrap() - 0.75).abs() < f64::EPSILON);
        assert!(Outcome::Win.win_ratio().is_none());
        assert!(Outcome::Loss { max_depth: 5 }.win_ratio().is_none());
    }
}
