//! Game-theoretic move evaluation for Ghost
//!
//! Classifies every next letter by where forced completions land, then picks one.

mod calculator;
mod selector;

pub use calculator::{
    MoveClassification, Outcome, ParityCounts, classify_child, classify_children, count_parity,
};
pub use selector::select_move;
