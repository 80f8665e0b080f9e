use log::debug;
use rand::rngs::SmallRng;

use crate::core::{Board, Coord, BB, SHIPS};

use super::{Attacker, Notice, Presenter, Prompt, SoundCue};

/// Attacker whose targets come from outside: a keyboard, a script, a test.
///
/// Coordinates are passed through unchecked; the match rejects anything off
/// the board or already attacked and asks again.
pub struct ManualPlayer<P: Prompt> {
    prompt: P,
}

impl<P: Prompt> ManualPlayer<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn into_inner(self) -> P {
        self.prompt
    }
}

impl<P: Prompt> Attacker for ManualPlayer<P> {
    fn select_target(&mut self, _rng: &mut SmallRng, _attacked: &BB) -> Option<Coord> {
        self.prompt.request_coordinate()
    }
}

/// Place every ship not yet on `board` from prompted anchors and
/// orientations, in fleet order. Rejected placements are reported and asked
/// for again. Returns `None` if the prompt runs dry.
pub fn place_fleet<P, V>(board: &mut Board, prompt: &mut P, presenter: &mut V) -> Option<()>
where
    P: Prompt + ?Sized,
    V: Presenter + ?Sized,
{
    for def in SHIPS {
        if board.ship(def.name()).is_some_and(|s| s.is_placed()) {
            continue;
        }
        loop {
            presenter.render_placement(board, def);
            let anchor = prompt.request_coordinate()?;
            let orientation = prompt.request_orientation()?;
            match board.place_manually(anchor, orientation, def.name()) {
                Ok(()) => {
                    presenter.notify(Notice::Placed { ship: def.name() });
                    presenter.notify(Notice::Sound(SoundCue::PlaceShip));
                    break;
                }
                Err(error) => {
                    debug!("rejected {} at {:?}: {}", def.name(), anchor, error);
                    presenter.notify(Notice::PlacementRejected {
                        ship: def.name(),
                        error,
                    });
                }
            }
        }
    }
    Some(())
}
