//! Match state representation.
//!
//! Holds the complete snapshot of a match at a given point in time:
//! board, phase, player roster, turn cursor, and card pool. A `State` is
//! never mutated; every successful command builds a new snapshot and swaps
//! it in wholesale, so snapshots are safe to keep, share, and compare.

use super::card::Card;
use super::player::{Player, PlayerId};
use super::territory::Board;

/// The phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Players are distributing their starting units.
    Placing,
    /// Every starting unit is placed; the main game has begun.
    Playing,
}

/// Complete match state at a point in time.
///
/// The roster keeps the order supplied at setup for the whole match; whose
/// turn it is lives in the `turn` cursor, advanced modulo roster length.
/// Construction never validates invariants -- the `game` module only ever
/// builds valid states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub board: Board,
    pub phase: Phase,
    /// All players, in setup order. Never reordered.
    pub players: Vec<Player>,
    /// Index into `players` of the player entitled to act.
    pub turn: usize,
    /// The draw pile. Untouched during placement.
    pub cards: Vec<Card>,
}

impl State {
    /// The player entitled to act on the current turn.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Looks up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players in turn order, starting with the current player.
    pub fn turn_order(&self) -> impl Iterator<Item = &Player> {
        self.players[self.turn..]
            .iter()
            .chain(self.players[..self.turn].iter())
    }
}
