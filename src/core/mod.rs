//! Core domain types for Ghost
//!
//! This module contains the fundamental domain types: validated letters, game rules
//! and the dictionary prefix tree. Everything here is pure and testable.

mod config;
mod letter;
mod lexicon;

pub use config::{ConfigError, DEFAULT_HUMAN_PLAYERS, DEFAULT_MIN_WORD_LENGTH, GameConfig};
pub use letter::{Letter, LetterError};
pub use lexicon::{Lexicon, NodeId, TrieNode};
