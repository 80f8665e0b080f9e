//! Collaborators the engine reports to and asks for input.
//!
//! Presentation (rendering, sound, prompting) lives outside the engine. The
//! engine only sees these traits and never waits on a presenter.

use crate::core::{AttackOutcome, Board, BoardError, Coord, Orientation, ShipType};
use crate::game::Side;

/// Named sound effects a presenter may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Hit,
    Miss,
    Win,
    GameOver,
    PlaceShip,
}

/// Informational events emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// `side` fired at `coord` and the shot was resolved.
    Outcome {
        side: Side,
        coord: Coord,
        outcome: AttackOutcome,
    },
    /// `side` fired at `coord` but the shot was rejected; no turn consumed.
    Rejected {
        side: Side,
        coord: Coord,
        error: BoardError,
    },
    /// A proposed ship placement was refused.
    PlacementRejected { ship: &'static str, error: BoardError },
    /// A ship was placed during setup.
    Placed { ship: &'static str },
    GameOver { winner: Side },
    Sound(SoundCue),
}

/// Source of human input: target cells, placement anchors and orientations.
///
/// `None` means the input stream is gone; the engine abandons the current
/// operation without touching board state.
pub trait Prompt {
    /// Raw coordinate as typed. The engine validates the range and asks
    /// again if it is off the board.
    fn request_coordinate(&mut self) -> Option<Coord>;

    fn request_orientation(&mut self) -> Option<Orientation>;
}

/// Sink for engine events and board snapshots. Return values are ignored.
pub trait Presenter {
    fn notify(&mut self, notice: Notice);

    /// Show `own` (fully visible) next to `opponent` (masked).
    fn render(&mut self, _own: &Board, _opponent: &Board) {}

    /// Show `board` while `next` waits to be placed.
    fn render_placement(&mut self, _board: &Board, _next: ShipType) {}
}

/// Presenter that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Presenter for Silent {
    fn notify(&mut self, _notice: Notice) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice)
    }

    fn render(&mut self, own: &Board, opponent: &Board) {
        (**self).render(own, opponent)
    }

    fn render_placement(&mut self, board: &Board, next: ShipType) {
        (**self).render_placement(board, next)
    }
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn request_coordinate(&mut self) -> Option<Coord> {
        (**self).request_coordinate()
    }

    fn request_orientation(&mut self) -> Option<Orientation> {
        (**self).request_orientation()
    }
}
