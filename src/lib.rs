//! Ghost
//!
//! A player and analyst for the word game Ghost. The computer picks its letters by
//! classifying, for every possible continuation, which participant each dictionary
//! word below it would force to finish the word.
//!
//! # Quick Start
//!
//! ```rust
//! use ghost_solver::core::{GameConfig, Lexicon};
//! use ghost_solver::solver::outcome::classify_children;
//!
//! let lexicon = Lexicon::from_words(["bath", "bathe", "batch"]);
//! let config = GameConfig::default();
//!
//! // Classify every letter that can follow "bat"
//! let position = lexicon.walk("bat").unwrap();
//! for m in classify_children(&lexicon, position, &config) {
//!     println!("{}: {}", m.letter, m.outcome.label());
//! }
//! ```

// Core domain types
pub mod core;

// Move evaluation and computer strategies
pub mod solver;

// Match orchestration
pub mod game;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
