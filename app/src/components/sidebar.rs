use codenames_api::prelude::*;
use dioxus::prelude::*;

use crate::components::{KeyCard, TeamPicker};

/// Join prompt until the player picks a side, that side's key card after.
#[component]
pub fn Sidebar(game: Game, team: Team) -> Element {
    match game.key_card(team) {
        Some(layout) => rsx! {
            KeyCard { team: team, layout: layout.to_vec() }
        },
        None => rsx! {
            TeamPicker { membership: game.team_membership() }
        },
    }
}
