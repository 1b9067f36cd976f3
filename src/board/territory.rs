//! Territories and the board that holds them.
//!
//! A board's set of territory ids is fixed at setup; only ownership changes
//! over the course of a match, and every ownership change produces a new
//! value rather than mutating in place.

use std::fmt;

use super::player::PlayerId;

/// Identifies a territory on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerritoryId(pub u32);

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A region of the map that can be claimed by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    /// The player holding this territory, if any. Unowned at setup.
    pub owner: Option<PlayerId>,
}

impl Territory {
    /// Creates an unowned territory.
    pub fn new(id: TerritoryId, name: impl Into<String>) -> Territory {
        Territory {
            id,
            name: name.into(),
            owner: None,
        }
    }

    /// Returns a copy owned by `player`, unconditionally.
    /// Callers must have already checked the ownership rules.
    pub fn claimed_by(&self, player: PlayerId) -> Territory {
        Territory {
            owner: Some(player),
            ..self.clone()
        }
    }
}

/// An ordered collection of territories with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    territories: Vec<Territory>,
}

impl Board {
    /// Creates a board from an ordered territory list.
    /// Id uniqueness is checked at match setup, not here.
    pub fn new(territories: Vec<Territory>) -> Board {
        Board { territories }
    }

    /// Looks up a territory by id.
    pub fn territory(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.iter().find(|t| t.id == id)
    }

    /// Returns true if the board has a territory with this id.
    pub fn contains(&self, id: TerritoryId) -> bool {
        self.territory(id).is_some()
    }

    /// All territories in board order.
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Returns a copy of the board with the given territory owned by
    /// `player`, unconditionally. Callers must have already checked the
    /// ownership rules and that the territory exists.
    pub fn with_owner(&self, id: TerritoryId, player: PlayerId) -> Board {
        let territories = self
            .territories
            .iter()
            .map(|t| {
                if t.id == id {
                    t.claimed_by(player)
                } else {
                    t.clone()
                }
            })
            .collect();
        Board { territories }
    }
}
