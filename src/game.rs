//! Match controller: two boards, two attackers, strict turn alternation.

use core::fmt;

use alloc::boxed::Box;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::core::{AttackOutcome, Board, BoardError, Coord};
use crate::player::{Attacker, Notice, Presenter, SoundCue};

/// One of the two combatants. The player side always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Current status of a match, seen from the player side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Shot tally for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotStats {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub sunk: usize,
}

impl ShotStats {
    fn record(&mut self, outcome: AttackOutcome) {
        self.shots += 1;
        match outcome {
            AttackOutcome::Miss => self.misses += 1,
            AttackOutcome::Hit(_) => self.hits += 1,
            AttackOutcome::Sunk(_) => {
                self.hits += 1;
                self.sunk += 1;
            }
        }
    }

    /// Hits as a percentage of shots; 0 before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.hits as f64 * 100.0 / self.shots as f64
        }
    }
}

/// A single resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub coord: Coord,
    pub outcome: AttackOutcome,
    /// Set when this shot sank the last enemy ship.
    pub winner: Option<Side>,
}

/// Why a submitted shot was not played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The board refused the shot; the same side must shoot again.
    Rejected(BoardError),
    /// The match already has a winner.
    Finished,
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Rejected(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Rejected(e) => write!(f, "Shot rejected: {}", e),
            MatchError::Finished => write!(f, "Match is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

struct Combatant {
    board: Board,
    attacker: Box<dyn Attacker>,
    stats: ShotStats,
}

pub struct Match {
    player: Combatant,
    opponent: Combatant,
    to_move: Side,
    winner: Option<Side>,
}

impl Match {
    /// Set up a match between two deployed fleets. The player moves first.
    pub fn new(
        player_board: Board,
        player: Box<dyn Attacker>,
        opponent_board: Board,
        opponent: Box<dyn Attacker>,
    ) -> Self {
        info!("match started");
        Match {
            player: Combatant {
                board: player_board,
                attacker: player,
                stats: ShotStats::default(),
            },
            opponent: Combatant {
                board: opponent_board,
                attacker: opponent,
                stats: ShotStats::default(),
            },
            to_move: Side::Player,
            winner: None,
        }
    }

    /// Start over with fresh boards, keeping both attackers but wiping
    /// their memory.
    pub fn rematch(&mut self, player_board: Board, opponent_board: Board) {
        for (side, board) in [
            (&mut self.player, player_board),
            (&mut self.opponent, opponent_board),
        ] {
            side.board = board;
            side.attacker.reset();
            side.stats = ShotStats::default();
        }
        self.to_move = Side::Player;
        self.winner = None;
        info!("rematch started");
    }

    fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// (attacking side, defending side)
    fn engage(&mut self, attacker: Side) -> (&mut Combatant, &mut Combatant) {
        match attacker {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.combatant(side).board
    }

    pub fn stats(&self, side: Side) -> ShotStats {
        self.combatant(side).stats
    }

    /// Side whose shot is next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            None => GameStatus::InProgress,
            Some(Side::Player) => GameStatus::Won,
            Some(Side::Opponent) => GameStatus::Lost,
        }
    }

    /// Fire the side-to-move's shot at `coord`.
    ///
    /// A rejected shot leaves everything untouched, including whose turn it
    /// is. An accepted one is passed on to the attacker, ends the match if
    /// it sank the last ship, and otherwise hands the turn over.
    pub fn submit(&mut self, coord: Coord) -> Result<TurnReport, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        let side = self.to_move;
        let (attacker, defender) = self.engage(side);
        let outcome = defender.board.resolve_attack(coord.0, coord.1)?;
        attacker.stats.record(outcome);
        let attacked = defender.board.attacked();
        attacker.attacker.handle_outcome(coord, outcome, &attacked);

        let winner = if defender.board.all_ships_sunk() {
            info!("{:?} wins after {} shots", side, attacker.stats.shots);
            self.winner = Some(side);
            Some(side)
        } else {
            self.to_move = side.other();
            None
        };
        Ok(TurnReport {
            side,
            coord,
            outcome,
            winner,
        })
    }

    /// Ask the side to move for a target and play it, asking again after
    /// every rejection. `None` if the match is over or the attacker gave up.
    pub fn step<V: Presenter + ?Sized>(
        &mut self,
        rng: &mut SmallRng,
        presenter: &mut V,
    ) -> Option<TurnReport> {
        if self.winner.is_some() {
            return None;
        }
        let side = self.to_move;
        loop {
            let (attacker, defender) = self.engage(side);
            let attacked = defender.board.attacked();
            let coord = attacker.attacker.select_target(rng, &attacked)?;
            match self.submit(coord) {
                Ok(report) => {
                    presenter.notify(Notice::Outcome {
                        side,
                        coord,
                        outcome: report.outcome,
                    });
                    let cue = if report.outcome.is_hit() {
                        SoundCue::Hit
                    } else {
                        SoundCue::Miss
                    };
                    presenter.notify(Notice::Sound(cue));
                    return Some(report);
                }
                Err(MatchError::Rejected(error)) => {
                    debug!("{:?} shot at {:?} rejected: {}", side, coord, error);
                    let (attacker, _) = self.engage(side);
                    attacker.attacker.handle_rejection(coord, error);
                    presenter.notify(Notice::Rejected { side, coord, error });
                }
                Err(MatchError::Finished) => return None,
            }
        }
    }

    /// Alternate turns until one fleet is destroyed. Returns the winner, or
    /// `None` if an attacker gave up first.
    pub fn run<V: Presenter + ?Sized>(
        &mut self,
        rng: &mut SmallRng,
        presenter: &mut V,
    ) -> Option<Side> {
        while self.winner.is_none() {
            presenter.render(&self.player.board, &self.opponent.board);
            self.step(rng, presenter)?;
        }
        let winner = self.winner?;
        presenter.render(&self.player.board, &self.opponent.board);
        presenter.notify(Notice::GameOver { winner });
        let cue = match winner {
            Side::Player => SoundCue::Win,
            Side::Opponent => SoundCue::GameOver,
        };
        presenter.notify(Notice::Sound(cue));
        Some(winner)
    }
}
