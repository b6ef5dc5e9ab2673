//! One Ghost match between the human players and the computer
//!
//! The session owns the accumulated string and a position in the lexicon, and turns
//! every bad move into a terminal outcome rather than an error.

use crate::core::{GameConfig, Letter, Lexicon, NodeId};
use crate::solver::{MoveClassification, Strategy};
use std::fmt;

/// Whose move it is, or who lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// Human player, numbered from 1
    Human(usize),
    Computer,
}

impl Participant {
    /// Participant due to move once `turn` letters have been played
    ///
    /// Humans move in order 1..=n, then the computer, then round again.
    #[must_use]
    pub const fn at_turn(turn: usize, config: &GameConfig) -> Self {
        let seat = turn % config.total_participants();
        if seat < config.human_players() {
            Self::Human(seat + 1)
        } else {
            Self::Computer
        }
    }

    #[must_use]
    pub const fn is_computer(self) -> bool {
        matches!(self, Self::Computer)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human(n) => write!(f, "Player{n}"),
            Self::Computer => write!(f, "Computer"),
        }
    }
}

/// Why the losing participant lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// Completed a word of at least the minimum length
    CompletedWord,
    /// Produced a string no dictionary word continues
    DeadBranch,
    /// Played a letter that leaves the dictionary altogether
    UnextendableString,
    /// The computer had no letter to play
    NoLegalMove,
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompletedWord => write!(f, "completed a word"),
            Self::DeadBranch => write!(f, "made a string that cannot be extended"),
            Self::UnextendableString => write!(f, "made a string that is not the start of any word"),
            Self::NoLegalMove => write!(f, "had no letter to play"),
        }
    }
}

/// Final result of a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub loser: Participant,
    pub reason: LossReason,
    pub final_string: String,
}

/// Session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Terminal(GameOutcome),
}

/// A letter that was played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub participant: Participant,
    pub letter: Letter,
    /// Classification behind a computer move
    pub classification: Option<MoveClassification>,
}

/// Error type for session misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The lexicon holds no words, so no game can start
    EmptyDictionary,
    /// The session already has an outcome
    GameOver,
    /// The move was requested for someone whose turn it is not
    OutOfTurn { expected: Participant },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "The dictionary contains no playable words"),
            Self::GameOver => write!(f, "The game is already over"),
            Self::OutOfTurn { expected } => write!(f, "It is {expected}'s turn"),
        }
    }
}

impl std::error::Error for GameError {}

/// An in-progress or finished match
///
/// # Examples
/// ```
/// use ghost_solver::core::{GameConfig, Letter, Lexicon};
/// use ghost_solver::game::{GameSession, GameState, LossReason, Participant};
///
/// let lexicon = Lexicon::from_words(["bath"]);
/// let mut session = GameSession::new(&lexicon, GameConfig::default()).unwrap();
///
/// session.play_human(Letter::from_char('z').unwrap()).unwrap();
/// let GameState::Terminal(outcome) = session.state() else { panic!() };
/// assert_eq!(outcome.loser, Participant::Human(1));
/// assert_eq!(outcome.reason, LossReason::UnextendableString);
/// assert_eq!(outcome.final_string, "z");
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    lexicon: &'a Lexicon,
    config: GameConfig,
    position: NodeId,
    text: String,
    turn: usize,
    history: Vec<PlayedMove>,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a match at the root of `lexicon`
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the lexicon has no words.
    pub fn new(lexicon: &'a Lexicon, config: GameConfig) -> Result<Self, GameError> {
        if lexicon.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        Ok(Self {
            lexicon,
            config,
            position: lexicon.root(),
            text: String::new(),
            turn: 0,
            history: Vec::new(),
            state: GameState::InProgress,
        })
    }

    /// Participant due to move next
    #[must_use]
    pub const fn current_participant(&self) -> Participant {
        Participant::at_turn(self.turn, &self.config)
    }

    /// Apply a letter for the participant whose turn it is
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the session already has an outcome.
    pub fn advance(&mut self, letter: Letter) -> Result<&GameState, GameError> {
        self.apply(letter, None)
    }

    /// Apply a human letter
    ///
    /// # Errors
    /// Returns `GameError::GameOver` after the end of the game and
    /// `GameError::OutOfTurn` when the computer is due to move.
    pub fn play_human(&mut self, letter: Letter) -> Result<&GameState, GameError> {
        self.ensure_in_progress()?;
        if self.current_participant().is_computer() {
            return Err(GameError::OutOfTurn {
                expected: Participant::Computer,
            });
        }
        self.apply(letter, None)
    }

    /// Let the computer move using `strategy`
    ///
    /// Returns the chosen move, or `None` when no move existed, in which case the
    /// computer loses.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` after the end of the game and
    /// `GameError::OutOfTurn` when a human is due to move.
    pub fn play_computer<S: Strategy + ?Sized>(
        &mut self,
        strategy: &mut S,
    ) -> Result<Option<MoveClassification>, GameError> {
        self.ensure_in_progress()?;
        let expected = self.current_participant();
        if !expected.is_computer() {
            return Err(GameError::OutOfTurn { expected });
        }

        let Some(chosen) = strategy.choose_move(self.lexicon, self.position, &self.config) else {
            self.finish(Participant::Computer, LossReason::NoLegalMove, self.text.clone());
            return Ok(None);
        };

        self.apply(chosen.letter, Some(chosen))?;
        Ok(Some(chosen))
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.state {
            GameState::InProgress => Ok(()),
            GameState::Terminal(_) => Err(GameError::GameOver),
        }
    }

    fn apply(
        &mut self,
        letter: Letter,
        classification: Option<MoveClassification>,
    ) -> Result<&GameState, GameError> {
        self.ensure_in_progress()?;
        let mover = self.current_participant();

        self.history.push(PlayedMove {
            participant: mover,
            letter,
            classification,
        });

        let Some(child) = self.lexicon.child(self.position, letter) else {
            // The position stays put, only the reported string carries the letter
            let final_string = format!("{}{letter}", self.text);
            self.finish(mover, LossReason::UnextendableString, final_string);
            return Ok(&self.state);
        };

        self.position = child;
        self.text.push(letter.as_char());
        self.turn += 1;

        let node = self.lexicon.node(child);
        let completed = node.is_word_end() && self.text.len() >= self.config.min_word_length();
        let dead = !node.has_children();

        if completed {
            self.finish(mover, LossReason::CompletedWord, self.text.clone());
        } else if dead {
            self.finish(mover, LossReason::DeadBranch, self.text.clone());
        }

        Ok(&self.state)
    }

    fn finish(&mut self, loser: Participant, reason: LossReason, final_string: String) {
        log::info!("{loser} loses: {reason} ({final_string:?})");
        self.state = GameState::Terminal(GameOutcome {
            loser,
            reason,
            final_string,
        });
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The outcome, once the game is over
    #[must_use]
    pub const fn outcome(&self) -> Option<&GameOutcome> {
        match &self.state {
            GameState::InProgress => None,
            GameState::Terminal(outcome) => Some(outcome),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Terminal(_))
    }

    /// Letters accepted into the lexicon so far
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> NodeId {
        self.position
    }

    /// Number of letters accepted so far
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Every letter played, including a final unextendable one
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }
}
