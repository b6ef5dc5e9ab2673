//! Computer move strategies
//!
//! Defines the Strategy trait the game session asks for computer moves, and concrete
//! implementations.

use super::outcome::{MoveClassification, classify_children, select_move};
use crate::core::{GameConfig, Lexicon, NodeId};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// A strategy for choosing the computer's next letter
pub trait Strategy {
    /// Choose a move from `position`
    ///
    /// Returns `None` when `position` has no children at all.
    fn choose_move(
        &mut self,
        lexicon: &Lexicon,
        position: NodeId,
        config: &GameConfig,
    ) -> Option<MoveClassification>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Game-theoretic play (default)
    Optimal(OptimalStrategy<StdRng>),
    /// Random legal play that only avoids losing on the spot
    Random(RandomStrategy<StdRng>),
}

impl Strategy for StrategyType {
    fn choose_move(
        &mut self,
        lexicon: &Lexicon,
        position: NodeId,
        config: &GameConfig,
    ) -> Option<MoveClassification> {
        match self {
            Self::Optimal(s) => s.choose_move(lexicon, position, config),
            Self::Random(s) => s.choose_move(lexicon, position, config),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "optimal", "random". Defaults to optimal if the name is
    /// unrecognized. A seed makes every random choice reproducible.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

        match name {
            "random" | "easy" => Self::Random(RandomStrategy::new(rng)),
            _ => Self::Optimal(OptimalStrategy::new(rng)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Optimal(_) => "optimal",
            Self::Random(_) => "random",
        }
    }
}

/// Optimal strategy
///
/// Classifies every child and applies the win / uncertain / loss selection policy.
/// The random source only breaks ties between equally good moves.
pub struct OptimalStrategy<R> {
    rng: R,
}

impl<R: Rng> OptimalStrategy<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl OptimalStrategy<StdRng> {
    /// Optimal strategy with reproducible tie-breaks
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Strategy for OptimalStrategy<R> {
    fn choose_move(
        &mut self,
        lexicon: &Lexicon,
        position: NodeId,
        config: &GameConfig,
    ) -> Option<MoveClassification> {
        let moves = classify_children(lexicon, position, config);
        let chosen = select_move(&moves, &mut self.rng)?;

        log::debug!(
            "optimal strategy chose '{}' ({}) out of {} moves",
            chosen.letter,
            chosen.outcome.label(),
            moves.len()
        );
        Some(chosen)
    }
}

/// Random strategy
///
/// Picks uniformly among letters that neither complete a word nor leave a dead string.
/// When every letter loses immediately, picks any of them.
pub struct RandomStrategy<R> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_move(
        &mut self,
        lexicon: &Lexicon,
        position: NodeId,
        config: &GameConfig,
    ) -> Option<MoveClassification> {
        let moves = classify_children(lexicon, position, config);

        let safe: Vec<&MoveClassification> = moves
            .iter()
            .filter(|m| {
                let node = lexicon.node(m.node);
                let completes = node.is_word_end() && node.depth() >= config.min_word_length();
                !completes && node.has_children()
            })
            .collect();

        let chosen = safe
            .choose(&mut self.rng)
            .map(|&m| *m)
            .or_else(|| moves.choose(&mut self.rng).copied())?;

        log::debug!("random strategy chose '{}'", chosen.letter);
        Some(chosen)
    }
}
