//! Match orchestration and placement rules.
//!
//! `Game` owns the current `State` and the injected dice source, validates
//! every command against the placement rules, and swaps in a wholly new
//! snapshot on success. Rule violations come back as `RulesError` values;
//! a failed command leaves the state untouched.

use thiserror::Error;

use crate::board::card::standard_deck;
use crate::board::player::{Player, PlayerId};
use crate::board::state::{Phase, State};
use crate::board::territory::{Board, TerritoryId};
use crate::dice::Dice;

/// Number of units each player must place during the placement phase.
pub const STARTING_UNITS: u32 = 35;

/// Errors raised while setting up a match.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("a match needs at least one player")]
    NoPlayers,

    #[error("a match needs at least one territory")]
    NoTerritories,

    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    #[error("duplicate territory id {0}")]
    DuplicateTerritory(TerritoryId),

    #[error("dice roll {roll} cannot pick a starting player among {players}")]
    DiceOutOfRange { roll: u32, players: usize },
}

/// Rule violations raised by the placement command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("unknown territory {0}")]
    UnknownTerritory(TerritoryId),

    #[error("it is not player {0}'s turn")]
    NotPlayersTurn(PlayerId),

    #[error("territory {territory} is already held by player {owner}")]
    IllegalMove {
        territory: TerritoryId,
        owner: PlayerId,
    },

    #[error("the placement phase is over")]
    PlacementOver,
}

/// A running match.
///
/// Owns the current state snapshot and the dice capability. The dice are
/// rolled exactly once, during setup, to decide who places first.
pub struct Game<D: Dice> {
    state: State,
    dice: D,
}

impl<D: Dice> Game<D> {
    /// Sets up a match: validates the inputs, seeds every player's
    /// placement quota, rolls the dice once to pick the starting player,
    /// and builds the draw pile.
    ///
    /// The roll is 1-based: a roll of `d` makes the `d`-th player in the
    /// roster the first to act. Rolls outside `[1, roster length]` are
    /// rejected.
    pub fn new(board: Board, roster: Vec<Player>, mut dice: D) -> Result<Game<D>, SetupError> {
        if roster.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if board.is_empty() {
            return Err(SetupError::NoTerritories);
        }
        for (i, player) in roster.iter().enumerate() {
            if roster[..i].iter().any(|p| p.id == player.id) {
                return Err(SetupError::DuplicatePlayer(player.id));
            }
        }
        for (i, territory) in board.territories().iter().enumerate() {
            if board.territories()[..i].iter().any(|t| t.id == territory.id) {
                return Err(SetupError::DuplicateTerritory(territory.id));
            }
        }

        let players: Vec<Player> = roster
            .into_iter()
            .map(|p| p.give_units_to_place(STARTING_UNITS))
            .collect();

        let roll = dice.roll();
        if roll < 1 || roll as usize > players.len() {
            return Err(SetupError::DiceOutOfRange {
                roll,
                players: players.len(),
            });
        }

        let cards = standard_deck(&board);
        let state = State {
            board,
            phase: Phase::Placing,
            players,
            turn: (roll - 1) as usize,
            cards,
        };
        Ok(Game { state, dice })
    }

    /// The current state snapshot.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Rolls the injected dice. The engine itself rolls only during setup;
    /// this passthrough is for callers that share the die.
    pub fn roll_dice(&mut self) -> u32 {
        self.dice.roll()
    }

    /// Returns true if a player with this id is in the roster.
    pub fn player_exists(&self, id: PlayerId) -> bool {
        self.state.player(id).is_some()
    }

    /// Returns true if the board has a territory with this id.
    pub fn territory_exists(&self, id: TerritoryId) -> bool {
        self.state.board.contains(id)
    }

    /// Returns true if it is this player's turn to act.
    pub fn is_player_turn(&self, id: PlayerId) -> bool {
        self.state.current_player().id == id
    }

    /// Places one unit for `player_id` in `territory_id`.
    ///
    /// Rules, checked in order: the placement phase must still be running;
    /// the player and territory must exist; it must be the player's turn;
    /// and the territory must be unowned or already held by the player.
    /// On success the player's quota drops by one, the turn advances (even
    /// on the final placement), and the phase flips to Playing once every
    /// quota is spent. On failure nothing changes.
    pub fn place_unit(
        &mut self,
        player_id: PlayerId,
        territory_id: TerritoryId,
    ) -> Result<(), RulesError> {
        if self.state.phase != Phase::Placing {
            return Err(RulesError::PlacementOver);
        }
        if !self.player_exists(player_id) {
            return Err(RulesError::UnknownPlayer(player_id));
        }
        let territory = self
            .state
            .board
            .territory(territory_id)
            .ok_or(RulesError::UnknownTerritory(territory_id))?;
        if !self.is_player_turn(player_id) {
            return Err(RulesError::NotPlayersTurn(player_id));
        }
        if let Some(owner) = territory.owner {
            if owner != player_id {
                return Err(RulesError::IllegalMove {
                    territory: territory_id,
                    owner,
                });
            }
        }

        // Every rule holds; build the next snapshot.
        let board = self.state.board.with_owner(territory_id, player_id);
        let players: Vec<Player> = self
            .state
            .players
            .iter()
            .map(|p| if p.id == player_id { p.placed_unit() } else { *p })
            .collect();
        let phase = if players.iter().any(|p| p.units_left_to_place > 0) {
            Phase::Placing
        } else {
            Phase::Playing
        };
        let turn = (self.state.turn + 1) % players.len();

        self.state = State {
            board,
            phase,
            players,
            turn,
            cards: self.state.cards.clone(),
        };
        Ok(())
    }
}
