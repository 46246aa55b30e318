use serde::{Deserialize, Serialize};

use crate::state::Team;

/// Body of `POST /new-game`. Fetches the game with this id, creating it first
/// if the service has never seen it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub game_id: String,
}

/// Body of `POST /guess`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub game_id: String,

    /// Board index of the guessed tile.
    pub index: usize,

    pub player_id: String,

    /// The team the player guesses for. Never `Team::NoTeam`.
    pub team: Team,
}
