//! Board state: the ground-truth grid, the attacker-facing grid, and the fleet.

use core::fmt;

use log::{debug, trace};
use rand::Rng;

use super::common::{AttackOutcome, BoardError, Coord};
use super::config::{self, BB, BOARD_SIZE, NUM_SHIPS, SHIPS};
use super::ship::{Orientation, Ship, ShipType};

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship(ShipType),
    Hit,
    Miss,
}

impl Cell {
    /// Hit or miss; such a cell can never be targeted again.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }

    /// Character used by plain-text renderers.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Ship(def) => def.symbol(),
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Whether ship cells are copied into the visible grid at placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The owner looks at this board: ships are shown.
    Owner,
    /// Ships stay hidden until hit.
    Concealed,
}

/// Damage report for one ship of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipStatus {
    pub name: &'static str,
    pub size: usize,
    pub remaining: usize,
    pub sunk: bool,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    visibility: Visibility,
    truth: Grid,
    visible: Grid,
    ships: [Ship; NUM_SHIPS],
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(visibility: Visibility) -> Self {
        Board {
            visibility,
            truth: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            visible: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: SHIPS.map(Ship::new),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Authoritative cell states, including hidden ships.
    pub fn truth(&self) -> &Grid {
        &self.truth
    }

    /// Cell states as shown to whoever this board's visibility targets.
    pub fn visible(&self) -> &Grid {
        &self.visible
    }

    /// Visible grid with every unhit ship masked as water, regardless of
    /// this board's visibility. This is what an opponent may look at.
    pub fn opponent_view(&self) -> Grid {
        let mut view = self.visible;
        for cell in view.iter_mut().flatten() {
            if let Cell::Ship(_) = cell {
                *cell = Cell::Empty;
            }
        }
        view
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        check_bounds(row, col)?;
        Ok(self.truth[row][col])
    }

    /// Immutable view of the fleet, in fleet-table order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// True once every ship of the fleet has a position.
    pub fn is_deployed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn fleet_status(&self) -> [ShipStatus; NUM_SHIPS] {
        self.ships.map(|s| ShipStatus {
            name: s.name(),
            size: s.size(),
            remaining: s.remaining(),
            sunk: s.is_sunk(),
        })
    }

    /// Cells resolved as hits.
    pub fn hits(&self) -> BB {
        self.visible_matching(|c| c == Cell::Hit)
    }

    /// Cells resolved as misses.
    pub fn misses(&self) -> BB {
        self.visible_matching(|c| c == Cell::Miss)
    }

    /// Cells that can no longer be targeted.
    pub fn attacked(&self) -> BB {
        self.visible_matching(|c| c.is_resolved())
    }

    /// Legal targets left on this board.
    pub fn unattacked(&self) -> BB {
        !self.attacked()
    }

    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE && self.visible[row][col].is_resolved()
    }

    fn visible_matching(&self, pred: impl Fn(Cell) -> bool) -> BB {
        let mut mask = BB::new();
        for (r, row) in self.visible.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if pred(cell) {
                    // in bounds by construction
                    let _ = mask.insert(r, c);
                }
            }
        }
        mask
    }

    /// Check that `ship_type` anchored at `anchor` fits on the board and
    /// overlaps no ship already placed. Returns the cells it would cover.
    pub fn validate_placement(
        &self,
        ship_type: ShipType,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<BB, BoardError> {
        let footprint = ship_type.footprint(anchor, orientation)?;
        let occupied = self
            .ships
            .iter()
            .fold(BB::new(), |acc, s| acc | s.footprint());
        if footprint.intersects(&occupied) {
            return Err(BoardError::Overlap);
        }
        Ok(footprint)
    }

    fn commit_placement(
        &mut self,
        index: usize,
        anchor: Coord,
        orientation: Orientation,
        footprint: BB,
    ) {
        let def = self.ships[index].ship_type();
        for (r, c) in footprint.iter() {
            self.truth[r][c] = Cell::Ship(def);
            if self.visibility == Visibility::Owner {
                self.visible[r][c] = Cell::Ship(def);
            }
        }
        self.ships[index].place(anchor, orientation, footprint);
        debug!(
            "placed {} at {:?} {:?}",
            def.name(),
            anchor,
            orientation
        );
    }

    /// Place the named ship at `anchor`. Nothing changes on error.
    pub fn place_manually(
        &mut self,
        anchor: Coord,
        orientation: Orientation,
        ship_name: &str,
    ) -> Result<(), BoardError> {
        let def = config::ship_type(ship_name).ok_or(BoardError::NameNotFound)?;
        let index = self
            .ships
            .iter()
            .position(|s| s.ship_type() == def)
            .ok_or(BoardError::NameNotFound)?;
        if self.ships[index].is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let footprint = self.validate_placement(def, anchor, orientation)?;
        self.commit_placement(index, anchor, orientation, footprint);
        Ok(())
    }

    /// Sample orientation and anchor until `ship_type` fits, returning the
    /// placement and the cells it covers. Retries are unbounded; the fleet
    /// covers 17 of 100 cells, so a free spot always exists.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> (Coord, Orientation, BB) {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let anchor = (
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if let Ok(footprint) = self.validate_placement(ship_type, anchor, orientation) {
                trace!("{} fits after {} attempt(s)", ship_type.name(), attempts);
                return (anchor, orientation, footprint);
            }
        }
    }

    /// Place every ship not yet on the board at a random free position,
    /// in fleet order.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for index in 0..NUM_SHIPS {
            if self.ships[index].is_placed() {
                continue;
            }
            let def = self.ships[index].ship_type();
            let (anchor, orientation, footprint) = self.random_placement(rng, def);
            self.commit_placement(index, anchor, orientation, footprint);
        }
    }

    /// Resolve an attack at (row, col).
    pub fn resolve_attack(&mut self, row: usize, col: usize) -> Result<AttackOutcome, BoardError> {
        check_bounds(row, col)?;
        if self.visible[row][col].is_resolved() {
            return Err(BoardError::AlreadyAttacked);
        }
        match self.truth[row][col] {
            Cell::Ship(_) => {
                let ship = self
                    .ships
                    .iter_mut()
                    .find(|s| s.alive().contains(row, col))
                    .ok_or(BoardError::AlreadyAttacked)?;
                ship.register_hit(row, col);
                self.truth[row][col] = Cell::Hit;
                self.visible[row][col] = Cell::Hit;
                let outcome = if ship.is_sunk() {
                    AttackOutcome::Sunk(ship.name())
                } else {
                    AttackOutcome::Hit(ship.name())
                };
                debug!("attack at ({}, {}): {:?}", row, col, outcome);
                Ok(outcome)
            }
            Cell::Empty => {
                self.visible[row][col] = Cell::Miss;
                debug!("attack at ({}, {}): miss", row, col);
                Ok(AttackOutcome::Miss)
            }
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyAttacked),
        }
    }
}

fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        Err(BoardError::OutOfBounds)
    } else {
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ visibility: {:?}", self.visibility)?;
        for (truth, visible) in self.truth.iter().zip(self.visible.iter()) {
            f.write_str("  ")?;
            for cell in truth {
                write!(f, "{}", cell.symbol())?;
            }
            f.write_str("  ")?;
            for cell in visible {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
