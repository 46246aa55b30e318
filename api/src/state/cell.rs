use serde::{Deserialize, Serialize};

use super::{Color, Team};

/// One team's marker on a tile: whether the tile has been revealed from that
/// team's key card, and the color it showed.
///
/// Encoded as a two-element array, `[revealed, color]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure(pub bool, pub Color);

impl Exposure {
    pub fn new(revealed: bool, color: Color) -> Self {
        Self(revealed, color)
    }

    pub fn is_revealed(&self) -> bool {
        self.0
    }

    pub fn color(&self) -> Color {
        self.1
    }
}

/// A word tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub index: usize,
    pub word: String,

    /// Marker set when the tile is revealed against team A's key card.
    pub a: Exposure,

    /// Marker set when the tile is revealed against team B's key card.
    pub b: Exposure,
}

impl Cell {
    pub fn marker(&self, team: Team) -> Option<Exposure> {
        match team {
            Team::A => Some(self.a),
            Team::B => Some(self.b),
            Team::NoTeam => None,
        }
    }

    /// True if either team's marker shows the tile revealed as `color`.
    pub fn is_exposed(&self, color: Color) -> bool {
        let shown = Exposure(true, color);
        self.a == shown || self.b == shown
    }

    /// The color that settles this tile for both teams. Green wins over black
    /// if the markers disagree.
    pub fn exposed_color(&self) -> Option<Color> {
        [Color::Green, Color::Black]
            .into_iter()
            .find(|&color| self.is_exposed(color))
    }

    /// Whether `team` may guess this tile next.
    ///
    /// A tile is closed to a team once its guess has already revealed it
    /// against the other side's card, and closed to everyone once it shows
    /// green or black. `Team::NoTeam` can never pick.
    pub fn is_pickable_by(&self, team: Team) -> bool {
        let Some(opponent) = team.opponent().and_then(|t| self.marker(t)) else {
            return false;
        };
        !opponent.is_revealed() && self.exposed_color().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(a: Exposure, b: Exposure) -> Cell {
        Cell {
            index: 7,
            word: "lemon".to_string(),
            a,
            b,
        }
    }

    #[test]
    fn fresh_cell_is_pickable_by_both_teams() {
        let c = cell(Exposure::default(), Exposure::default());
        assert!(c.is_pickable_by(Team::A));
        assert!(c.is_pickable_by(Team::B));
        assert!(!c.is_pickable_by(Team::NoTeam));
        assert_eq!(c.exposed_color(), None);
    }

    #[test]
    fn revealed_marker_closes_cell_to_the_guessing_team_only() {
        // Team A guessed it and it came up tan on B's card.
        let c = cell(Exposure::default(), Exposure::new(true, Color::Tan));
        assert!(!c.is_pickable_by(Team::A));
        assert!(c.is_pickable_by(Team::B));

        let c = cell(Exposure::new(true, Color::Tan), Exposure::default());
        assert!(c.is_pickable_by(Team::A));
        assert!(!c.is_pickable_by(Team::B));
    }

    #[test]
    fn green_or_black_exposure_closes_cell_to_everyone() {
        for color in [Color::Green, Color::Black] {
            let c = cell(Exposure::new(true, color), Exposure::default());
            assert!(c.is_exposed(color));
            assert_eq!(c.exposed_color(), Some(color));
            assert!(!c.is_pickable_by(Team::A));
            assert!(!c.is_pickable_by(Team::B));
        }
    }

    #[test]
    fn unrevealed_color_does_not_count_as_exposed() {
        let c = cell(Exposure::new(false, Color::Green), Exposure::new(false, Color::Black));
        assert!(!c.is_exposed(Color::Green));
        assert!(!c.is_exposed(Color::Black));
        assert!(c.is_pickable_by(Team::A));
    }

    #[test]
    fn green_wins_when_markers_disagree() {
        let c = cell(Exposure::new(true, Color::Black), Exposure::new(true, Color::Green));
        assert_eq!(c.exposed_color(), Some(Color::Green));
    }
}
