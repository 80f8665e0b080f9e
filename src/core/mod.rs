//! Core fleet engine (no_std compatible)
//!
//! Ships, boards, attack resolution and the automated opponent's targeting.
//! Nothing here performs I/O; randomness is always passed in by the caller.

pub mod ai;
pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod ship;

// Re-export commonly used types
pub use ai::{
    sample_uniform, sample_weighted, Axis, Difficulty, ProbabilityMap, Targeting, TargetingState,
};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell, Grid, ShipStatus, Visibility};
pub use common::{AttackOutcome, BoardError, Coord};
pub use config::*;
pub use ship::{Orientation, Ship, ShipType};
