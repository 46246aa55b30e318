use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two cooperating sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    A,
    B,

    /// The player has not joined a side in this game yet.
    #[default]
    #[serde(rename = "none")]
    NoTeam,
}

impl Team {
    /// The side whose key card a guess by `self` is checked against.
    pub fn opponent(self) -> Option<Team> {
        match self {
            Team::A => Some(Team::B),
            Team::B => Some(Team::A),
            Team::NoTeam => None,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.write_str("A"),
            Team::B => f.write_str("B"),
            Team::NoTeam => f.write_str("no team"),
        }
    }
}

/// Tile color as printed on a key card or revealed on the board.
///
/// Encoded on the wire as a one-letter code. Codes this client does not know
/// decode to `Unknown` instead of failing the whole snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    Green,
    Black,
    Tan,
    #[default]
    Unknown,
}

impl Color {
    pub fn code(self) -> &'static str {
        match self {
            Color::Green => "g",
            Color::Black => "b",
            Color::Tan => "t",
            Color::Unknown => "?",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "g" => Color::Green,
            "b" => Color::Black,
            "t" => Color::Tan,
            _ => Color::Unknown,
        }
    }
}

impl From<String> for Color {
    fn from(code: String) -> Self {
        Color::from_code(&code)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.code().to_string()
    }
}
