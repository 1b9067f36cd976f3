//! Match setup definitions.
//!
//! Loads a board layout and player roster from a JSON scenario document and
//! turns them into the engine's setup inputs. The classic 42-territory
//! world map is built in for callers that just want the standard game.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::board::player::{Player, PlayerId};
use crate::board::territory::{Board, Territory, TerritoryId};

/// A full match setup parsed from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Player ids, in seating order.
    pub players: Vec<u32>,
    pub territories: Vec<TerritoryInput>,
}

/// A single territory as represented in the scenario JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct TerritoryInput {
    pub id: u32,
    pub name: String,
}

impl Scenario {
    /// Builds the board described by this scenario.
    pub fn board(&self) -> Board {
        Board::new(
            self.territories
                .iter()
                .map(|t| Territory::new(TerritoryId(t.id), t.name.clone()))
                .collect(),
        )
    }

    /// Builds the player roster described by this scenario.
    pub fn roster(&self) -> Vec<Player> {
        self.players
            .iter()
            .map(|id| Player::new(PlayerId(*id)))
            .collect()
    }
}

/// Loads a scenario from a JSON file at the given path.
pub fn load_scenario(path: &Path) -> Result<Scenario, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("failed to parse scenario JSON: {}", e))
}

/// Loads a scenario from a JSON string.
pub fn load_scenario_from_str(json: &str) -> Result<Scenario, String> {
    serde_json::from_str(json).map_err(|e| format!("failed to parse scenario JSON: {}", e))
}

/// The classic world map, grouped by continent.
static CLASSIC_TERRITORIES: [(u32, &str); 42] = [
    // North America
    (1, "Alaska"),
    (2, "Northwest Territory"),
    (3, "Greenland"),
    (4, "Alberta"),
    (5, "Ontario"),
    (6, "Quebec"),
    (7, "Western United States"),
    (8, "Eastern United States"),
    (9, "Central America"),
    // South America
    (10, "Venezuela"),
    (11, "Brazil"),
    (12, "Peru"),
    (13, "Argentina"),
    // Europe
    (14, "Iceland"),
    (15, "Scandinavia"),
    (16, "Great Britain"),
    (17, "Northern Europe"),
    (18, "Western Europe"),
    (19, "Southern Europe"),
    (20, "Ukraine"),
    // Africa
    (21, "North Africa"),
    (22, "Egypt"),
    (23, "East Africa"),
    (24, "Congo"),
    (25, "South Africa"),
    (26, "Madagascar"),
    // Asia
    (27, "Ural"),
    (28, "Siberia"),
    (29, "Yakutsk"),
    (30, "Kamchatka"),
    (31, "Irkutsk"),
    (32, "Mongolia"),
    (33, "Japan"),
    (34, "Afghanistan"),
    (35, "China"),
    (36, "Middle East"),
    (37, "India"),
    (38, "Siam"),
    // Australia
    (39, "Indonesia"),
    (40, "New Guinea"),
    (41, "Western Australia"),
    (42, "Eastern Australia"),
];

/// Builds the classic 42-territory world map.
pub fn classic_board() -> Board {
    Board::new(
        CLASSIC_TERRITORIES
            .iter()
            .map(|(id, name)| Territory::new(TerritoryId(*id), *name))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A two-player island skirmish.
    fn test_json() -> &'static str {
        r#"{
  "name": "island-duel",
  "players": [1, 2],
  "territories": [
    { "id": 1, "name": "Northreach" },
    { "id": 2, "name": "Southmarch" },
    { "id": 3, "name": "The Spice Coast" }
  ]
}"#
    }

    #[test]
    fn load_scenario_from_json_string() {
        let scenario = load_scenario_from_str(test_json()).unwrap();
        assert_eq!(scenario.name, "island-duel");
        assert_eq!(scenario.players, vec![1, 2]);
        assert_eq!(scenario.territories.len(), 3);
        assert_eq!(scenario.territories[2].name, "The Spice Coast");
    }

    #[test]
    fn scenario_builds_board_and_roster() {
        let scenario = load_scenario_from_str(test_json()).unwrap();

        let board = scenario.board();
        assert_eq!(board.len(), 3);
        assert_eq!(
            board.territory(TerritoryId(1)).map(|t| t.name.as_str()),
            Some("Northreach")
        );
        assert!(board.territories().iter().all(|t| t.owner.is_none()));

        let roster = scenario.roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, PlayerId(1));
        assert_eq!(roster[1].id, PlayerId(2));
    }

    #[test]
    fn malformed_json_reports_a_parse_error() {
        let err = load_scenario_from_str("not json").unwrap_err();
        assert!(err.contains("failed to parse scenario JSON"), "{}", err);
    }

    #[test]
    fn missing_field_reports_a_parse_error() {
        let err = load_scenario_from_str(r#"{ "name": "bare" }"#).unwrap_err();
        assert!(err.contains("failed to parse scenario JSON"), "{}", err);
    }

    #[test]
    fn missing_file_reports_a_read_error() {
        let err = load_scenario(Path::new("/nonexistent/scenario.json")).unwrap_err();
        assert!(err.contains("failed to read"), "{}", err);
    }

    #[test]
    fn classic_board_has_42_unique_territories() {
        let board = classic_board();
        assert_eq!(board.len(), 42);
        for (i, territory) in board.territories().iter().enumerate() {
            assert!(
                !board.territories()[..i].iter().any(|t| t.id == territory.id),
                "duplicate id {}",
                territory.id
            );
        }
    }

    #[test]
    fn classic_board_starts_unowned() {
        assert!(classic_board().territories().iter().all(|t| t.owner.is_none()));
    }
}
