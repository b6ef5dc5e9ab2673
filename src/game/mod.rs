//! Ghost match orchestration
//!
//! Turn order, move application and terminal-condition detection.

mod session;

pub use session::{
    GameError, GameOutcome, GameSession, GameState, LossReason, Participant, PlayedMove,
};
