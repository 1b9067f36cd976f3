//! Player identity and reinforcement quota.

use std::fmt;

/// Identifies a player within a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant in the match.
///
/// Players are immutable value types: the quota mutators return updated
/// copies rather than changing anything in place, so a `State` snapshot
/// can never be edited through an aliased player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub id: PlayerId,
    /// Units this player must still place before the match can leave the
    /// placement phase.
    pub units_left_to_place: u32,
}

impl Player {
    /// Creates a player with an empty quota.
    pub const fn new(id: PlayerId) -> Player {
        Player {
            id,
            units_left_to_place: 0,
        }
    }

    /// Returns a copy with the placement quota set to `n`.
    /// Called once per player, when the match is set up.
    pub const fn give_units_to_place(self, n: u32) -> Player {
        Player {
            id: self.id,
            units_left_to_place: n,
        }
    }

    /// Returns a copy with one fewer unit left to place.
    ///
    /// A zero quota here is a caller bug: the placement rules guarantee
    /// the acting player still has units to place.
    pub fn placed_unit(self) -> Player {
        debug_assert!(
            self.units_left_to_place > 0,
            "player {} has no units left to place",
            self.id
        );
        Player {
            id: self.id,
            units_left_to_place: self.units_left_to_place - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_has_empty_quota() {
        let player = Player::new(PlayerId(1));
        assert_eq!(player.id, PlayerId(1));
        assert_eq!(player.units_left_to_place, 0);
    }

    #[test]
    fn give_units_sets_quota() {
        let player = Player::new(PlayerId(1)).give_units_to_place(35);
        assert_eq!(player.units_left_to_place, 35);
    }

    #[test]
    fn placed_unit_decrements_quota() {
        let player = Player::new(PlayerId(2)).give_units_to_place(3);
        let player = player.placed_unit();
        assert_eq!(player.units_left_to_place, 2);
        assert_eq!(player.id, PlayerId(2));
    }

    #[test]
    fn mutators_leave_the_original_alone() {
        let before = Player::new(PlayerId(1)).give_units_to_place(5);
        let _after = before.placed_unit();
        assert_eq!(before.units_left_to_place, 5);
    }

    #[test]
    fn player_id_display() {
        assert_eq!(PlayerId(7).to_string(), "7");
    }
}
