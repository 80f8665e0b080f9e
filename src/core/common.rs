//! Common types for the engine: coordinates, attack outcomes and board errors.

use core::fmt;

use super::bitboard::BitBoardError;

/// A `(row, col)` position on the board.
pub type Coord = (usize, usize);

/// Result of an accepted attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck the named ship, which is still afloat.
    Hit(&'static str),
    /// Shot struck the last live cell of the named ship.
    Sunk(&'static str),
}

impl AttackOutcome {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, AttackOutcome::Sunk(_))
    }

    /// Name of the ship struck, if any.
    pub fn ship(&self) -> Option<&'static str> {
        match self {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit(name) | AttackOutcome::Sunk(name) => Some(name),
        }
    }
}

/// Errors returned by Board operations.
///
/// Every variant is recoverable by retrying with different input; the board
/// is left untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate (or part of a ship) lies outside the board.
    OutOfBounds,
    /// Ship placement covers a cell already taken by another ship.
    Overlap,
    /// Target cell was already resolved as a hit or a miss.
    AlreadyAttacked,
    /// Named ship is not part of the fleet.
    NameNotFound,
    /// Ship has already been placed on this board.
    ShipAlreadyPlaced,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { .. } => BoardError::OutOfBounds,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::Overlap => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadyAttacked => write!(f, "That cell has already been attacked"),
            BoardError::NameNotFound => write!(f, "Ship name not found in fleet"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
