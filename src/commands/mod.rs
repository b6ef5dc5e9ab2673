//! Command implementations

pub mod analyze;
pub mod openings;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_prefix};
pub use openings::{OpeningEntry, OpeningsSurvey, run_openings};
pub use simple::{Scoreboard, run_simple};
