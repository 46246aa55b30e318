use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Cell, Color, Team};

/// A snapshot of one game as returned by the service.
///
/// Snapshots are never patched locally; every fetch or guess response
/// replaces the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,

    /// Seed the service derived the word list and key cards from.
    #[serde(default)]
    pub seed: u64,

    /// Board tiles in index order.
    pub cells: Vec<Cell>,

    /// Team each known player last guessed for, keyed by player id.
    #[serde(default)]
    pub players: BTreeMap<String, Team>,

    /// Team A's key card.
    #[serde(default)]
    pub one_layout: Vec<Color>,

    /// Team B's key card.
    #[serde(default)]
    pub two_layout: Vec<Color>,
}

/// Headcount per team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Membership {
    pub a: usize,
    pub b: usize,
}

impl Membership {
    pub fn count(&self, team: Team) -> usize {
        match team {
            Team::A => self.a,
            Team::B => self.b,
            Team::NoTeam => 0,
        }
    }
}

impl Game {
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn team_membership(&self) -> Membership {
        self.players
            .values()
            .fold(Membership::default(), |mut m, team| {
                match team {
                    Team::A => m.a += 1,
                    Team::B => m.b += 1,
                    Team::NoTeam => {}
                }
                m
            })
    }

    /// The team `player_id` already plays for in this game, if any.
    pub fn resolve_default_team(&self, player_id: &str) -> Team {
        self.players.get(player_id).copied().unwrap_or_default()
    }

    pub fn key_card(&self, team: Team) -> Option<&[Color]> {
        match team {
            Team::A => Some(&self.one_layout),
            Team::B => Some(&self.two_layout),
            Team::NoTeam => None,
        }
    }
}
