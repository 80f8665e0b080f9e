//! Attackers and the collaborators they talk to
//!
//! - AiPlayer: automated attacker, normal or hard difficulty
//! - ManualPlayer: attacker fed by a `Prompt` (keyboard, script, ...)
//! - `interface`: the `Prompt`/`Presenter` traits presentation code implements
//! - `cli`: terminal implementations of those traits

use alloc::boxed::Box;

use crate::core::{AttackOutcome, BoardError, Coord, BB};
use rand::rngs::SmallRng;

/// Interface implemented by the two kinds of attacker.
///
/// An attacker is responsible for:
/// - proposing the next cell to fire at
/// - learning from the outcome of its shots
pub trait Attacker {
    /// Choose the next target. `attacked` holds every cell already resolved
    /// on the opponent board. `None` means the attacker gives up.
    fn select_target(&mut self, rng: &mut SmallRng, attacked: &BB) -> Option<Coord>;

    /// Inform the attacker of the result of its last shot. `attacked`
    /// already includes `coord`.
    fn handle_outcome(&mut self, _coord: Coord, _outcome: AttackOutcome, _attacked: &BB) {}

    /// Inform the attacker that its last proposal was refused.
    fn handle_rejection(&mut self, _coord: Coord, _error: BoardError) {}

    /// Forget everything learned in the previous match.
    fn reset(&mut self) {}
}

impl<A: Attacker + ?Sized> Attacker for Box<A> {
    fn select_target(&mut self, rng: &mut SmallRng, attacked: &BB) -> Option<Coord> {
        (**self).select_target(rng, attacked)
    }

    fn handle_outcome(&mut self, coord: Coord, outcome: AttackOutcome, attacked: &BB) {
        (**self).handle_outcome(coord, outcome, attacked)
    }

    fn handle_rejection(&mut self, coord: Coord, error: BoardError) {
        (**self).handle_rejection(coord, error)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

mod ai;
pub use ai::AiPlayer;

pub mod interface;
pub use interface::{Notice, Presenter, Prompt, Silent, SoundCue};

mod manual;
pub use manual::{place_fleet, ManualPlayer};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{TerminalPresenter, TerminalPrompt};
