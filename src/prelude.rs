//! Commonly used types and utilities for ease of import.

pub use crate::{
    place_fleet, AiPlayer, AttackOutcome, Attacker, Board, BoardError, Difficulty, GameStatus,
    ManualPlayer, Match, Notice, Orientation, Presenter, Prompt, Side, Silent, Visibility,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, TerminalPresenter, TerminalPrompt};
