//! Ghost move evaluation
//!
//! This module contains the outcome classifier, the move selector and the computer
//! strategies built on them.

pub mod outcome;
pub mod strategy;

pub use outcome::{MoveClassification, Outcome, ParityCounts};
pub use strategy::{OptimalStrategy, RandomStrategy, Strategy, StrategyType};
