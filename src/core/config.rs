//! Game rules shared by the classifier and the session

use std::fmt;

/// Default number of human players
pub const DEFAULT_HUMAN_PLAYERS: usize = 1;

/// Words shorter than this never end a game
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Validated game configuration
///
/// There is always exactly one computer player on top of the humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    human_players: usize,
    min_word_length: usize,
}

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoHumanPlayers,
    ZeroWordLength,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHumanPlayers => write!(f, "At least one human player is required"),
            Self::ZeroWordLength => write!(f, "Minimum word length must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_players: DEFAULT_HUMAN_PLAYERS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if `human_players` or `min_word_length` is zero.
    pub const fn new(human_players: usize, min_word_length: usize) -> Result<Self, ConfigError> {
        if human_players == 0 {
            return Err(ConfigError::NoHumanPlayers);
        }
        if min_word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        Ok(Self {
            human_players,
            min_word_length,
        })
    }

    #[inline]
    #[must_use]
    pub const fn human_players(&self) -> usize {
        self.human_players
    }

    /// Humans plus the computer
    #[inline]
    #[must_use]
    pub const fn total_participants(&self) -> usize {
        self.human_players + 1
    }

    #[inline]
    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Word ends at or above this depth are ignored by the classifier
    #[inline]
    #[must_use]
    pub const fn search_floor(&self) -> usize {
        self.min_word_length - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_human_four_letters() {
        let config = GameConfig::default();
        assert_eq!(config.human_players(), 1);
        assert_eq!(config.total_participants(), 2);
        assert_eq!(config.min_word_length(), 4);
        assert_eq!(config.search_floor(), 3);
    }

    #[test]
    fn multiple_humans() {
        let config = GameConfig::new(3, 4).unwrap();
        assert_eq!(config.total_participants(), 4);
    }

    #[test]
    fn rejects_zero_values() {
        assert_eq!(GameConfig::new(0, 4), Err(ConfigError::NoHumanPlayers));
        assert_eq!(GameConfig::new(1, 0), Err(ConfigError::ZeroWordLength));
    }
}
