//! Ship definitions and per-ship damage tracking.

use core::fmt;

use super::common::{BoardError, Coord};
use super::config::{self, BB, BOARD_SIZE};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `i` steps from `anchor` along this orientation.
    fn offset(self, (row, col): Coord, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// Type of ship: name, length and display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
    symbol: char,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize, symbol: char) -> Self {
        Self {
            name,
            length,
            symbol,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Single-character symbol shown on the owner's grid.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Cells covered when anchored at `anchor` with `orientation`.
    /// Fails with `OutOfBounds` if any cell falls off the board.
    pub fn footprint(&self, anchor: Coord, orientation: Orientation) -> Result<BB, BoardError> {
        let mut mask = BB::new();
        for i in 0..self.length {
            let (r, c) = orientation.offset(anchor, i);
            if r >= BOARD_SIZE || c >= BOARD_SIZE {
                return Err(BoardError::OutOfBounds);
            }
            mask.insert(r, c)?;
        }
        Ok(mask)
    }
}

/// A ship of the fleet. Unplaced until the board commits a footprint to it;
/// afterwards hits only ever shrink its set of live cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    placement: Option<(Coord, Orientation)>,
    footprint: BB,
    alive: BB,
}

impl Ship {
    /// An unplaced ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            placement: None,
            footprint: BB::new(),
            alive: BB::new(),
        }
    }

    /// An unplaced ship looked up by fleet name.
    pub fn from_name(name: &str) -> Result<Self, BoardError> {
        config::ship_type(name)
            .map(Ship::new)
            .ok_or(BoardError::NameNotFound)
    }

    pub(crate) fn place(&mut self, anchor: Coord, orientation: Orientation, footprint: BB) {
        self.placement = Some((anchor, orientation));
        self.footprint = footprint;
        self.alive = footprint;
    }

    /// Remove `(row, col)` from the live cells.
    /// Returns `true` only if the cell was a live part of this ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        self.alive.remove(row, col).unwrap_or(false)
    }

    /// A placed ship with no live cells left.
    pub fn is_sunk(&self) -> bool {
        self.is_placed() && self.alive.is_empty()
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    /// Anchor and orientation, once placed.
    pub fn placement(&self) -> Option<(Coord, Orientation)> {
        self.placement
    }

    /// Every cell the ship was placed on, hit or not.
    pub fn footprint(&self) -> BB {
        self.footprint
    }

    /// Cells not yet hit.
    pub fn alive(&self) -> BB {
        self.alive
    }

    /// Number of cells not yet hit.
    pub fn remaining(&self) -> usize {
        self.alive.len()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", placement: {:?}, remaining: {}/{} }}",
            self.ship_type.name(),
            self.placement,
            self.alive.len(),
            self.ship_type.length(),
        )
    }
}
