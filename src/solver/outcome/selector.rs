//! Move selection over classified children
//!
//! Prefers certain wins, then the best odds among uncertain moves, then the longest
//! forced loss, and finally any move at all.

use super::calculator::{MoveClassification, Outcome};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick one move from the classified children
///
/// - Any win: uniformly random among the wins
/// - Else any uncertain: highest share of favourable completions, first one on ties
/// - Else any loss: deepest forced completion, first one on ties
/// - Else any dead end or no-word-below move: uniformly random among them
///
/// Returns `None` only when `moves` is empty.
///
/// # Examples
/// ```
/// use ghost_solver::core::{GameConfig, Lexicon};
/// use ghost_solver::solver::outcome::{classify_children, select_move};
///
/// let lexicon = Lexicon::from_words(["cart", "carts"]);
/// let position = lexicon.walk("car").unwrap();
/// let moves = classify_children(&lexicon, position, &GameConfig::default());
///
/// let chosen = select_move(&moves, &mut rand::rng()).unwrap();
/// assert_eq!(chosen.letter.as_char(), 't');
/// ```
pub fn select_move<R: Rng + ?Sized>(
    moves: &[MoveClassification],
    rng: &mut R,
) -> Option<MoveClassification> {
    let wins: Vec<&MoveClassification> = moves
        .iter()
        .filter(|m| m.outcome == Outcome::Win)
        .collect();
    if let Some(&chosen) = wins.choose(rng) {
        return Some(*chosen);
    }

    if let Some(chosen) = best_uncertain(moves) {
        return Some(*chosen);
    }

    if let Some(chosen) = longest_loss(moves) {
        return Some(*chosen);
    }

    let fallback: Vec<&MoveClassification> = moves
        .iter()
        .filter(|m| matches!(m.outcome, Outcome::NoWordBelow | Outcome::DeadEnd))
        .collect();
    fallback.choose(rng).map(|&chosen| *chosen)
}

/// Uncertain move with the highest win ratio, keeping the first on ties
fn best_uncertain(moves: &[MoveClassification]) -> Option<&MoveClassification> {
    moves
        .iter()
        .filter_map(|m| m.outcome.win_ratio().map(|ratio| (m, ratio)))
        .fold(None, |best: Option<(&MoveClassification, f64)>, (m, ratio)| {
            match best {
                Some((_, best_ratio)) if best_ratio >= ratio => best,
                _ => Some((m, ratio)),
            }
        })
        .map(|(m, _)| m)
}

/// Loss move with the deepest forced completion, keeping the first on ties
fn longest_loss(moves: &[MoveClassification]) -> Option<&MoveClassification> {
    moves
        .iter()
        .filter_map(|m| match m.outcome {
            Outcome::Loss { max_depth } => Some((m, max_depth)),
            _ => None,
        })
        .fold(None, |best: Option<(&MoveClassification, usize)>, (m, depth)| {
            match best {
                Some((_, best_depth)) if best_depth >= depth => best,
                _ => Some((m, depth)),
            }
        })
        .map(|(m, _)| m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Letter, Lexicon, NodeId};
    use crate::solver::outcome::calculator::{ParityCounts, classify_children};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidate(c: char, outcome: Outcome) -> MoveClassification {
        MoveClassification {
            letter: Letter::from_char(c).unwrap(),
            node: NodeId::ROOT,
            counts: ParityCounts::default(),
            outcome,
        }
    }

    fn pick(moves: &[MoveClassification], seed: u64) -> char {
        let mut rng = StdRng::seed_from_u64(seed);
        select_move(moves, &mut rng).unwrap().letter.as_char()
    }

    #[test]
    fn win_always_chosen_when_available() {
        let moves = [
            candidate('a', Outcome::Loss { max_depth: 9 }),
            candidate('b', Outcome::Win),
            candidate(
                'c',
                Outcome::Uncertain {
                    matching: 9,
                    mismatching: 1,
                },
            ),
            candidate('d', Outcome::Win),
        ];

        for seed in 0..50 {
            let chosen = pick(&moves, seed);
            assert!(chosen == 'b' || chosen == 'd', "picked non-winning {chosen}");
        }
    }

    #[test]
    fn wins_chosen_randomly() {
        let moves = [
            candidate('a', Outcome::Win),
            candidate('b', Outcome::Win),
            candidate('c', Outcome::Win),
        ];

        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            seen.insert(pick(&moves, seed));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn uncertain_prefers_higher_ratio() {
        let moves = [
            candidate(
                'a',
                Outcome::Uncertain {
                    matching: 1,
                    mismatching: 3,
                },
            ),
            candidate(
                'b',
                Outcome::Uncertain {
                    matching: 2,
                    mismatching: 1,
                },
            ),
            candidate('c', Outcome::Loss { max_depth: 12 }),
        ];
        assert_eq!(pick(&moves, 0), 'b');
    }

    #[test]
    fn uncertain_ties_keep_first() {
        let moves = [
            candidate(
                'x',
                Outcome::Uncertain {
                    matching: 1,
                    mismatching: 1,
                },
            ),
            candidate(
                'y',
                Outcome::Uncertain {
                    matching: 2,
                    mismatching: 2,
                },
            ),
        ];
        for seed in 0..20 {
            assert_eq!(pick(&moves, seed), 'x');
        }
    }

    #[test]
    fn loss_maximizes_depth() {
        let moves = [
            candidate('a', Outcome::Loss { max_depth: 5 }),
            candidate('b', Outcome::Loss { max_depth: 8 }),
            candidate('c', Outcome::Loss { max_depth: 8 }),
            candidate('d', Outcome::DeadEnd),
        ];
        for seed in 0..20 {
            assert_eq!(pick(&moves, seed), 'b');
        }
    }

    #[test]
    fn falls_back_to_dead_ends() {
        let moves = [
            candidate('a', Outcome::DeadEnd),
            candidate('b', Outcome::NoWordBelow),
        ];
        for seed in 0..20 {
            let chosen = pick(&moves, seed);
            assert!(chosen == 'a' || chosen == 'b');
        }
    }

    #[test]
    fn no_moves_means_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_move(&[], &mut rng).is_none());
    }

    #[test]
    fn only_losing_letter_is_still_played() {
        let lexicon = Lexicon::from_words(["cat"]);
        let position = lexicon.walk("ca").unwrap();
        let moves = classify_children(&lexicon, position, &GameConfig::default());

        assert_eq!(pick(&moves, 3), 't');
    }

    #[test]
    fn prefers_win_over_loss_in_real_lexicon() {
        // After "car": 't' forces the opponent to finish "carts"; 'e' leaves us "career"
        let lexicon = Lexicon::from_words(["carts", "career"]);
        let position = lexicon.walk("car").unwrap();
        let moves = classify_children(&lexicon, position, &GameConfig::default());

        for seed in 0..20 {
            assert_eq!(pick(&moves, seed), 't');
        }
    }
}
