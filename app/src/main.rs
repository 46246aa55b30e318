#![allow(non_snake_case)]

mod components;
mod controller;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use route::Route;

// Configuration
pub const API_URL: &str = "http://localhost:8080";
pub const REFRESH_INTERVAL_MS: u32 = 3000;
pub const PLAYER_ID_KEY: &str = "codenames-green.player-id";
pub const RULES_URL: &str = "https://en.wikipedia.org/wiki/Codenames_(board_game)";

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

/// Id of the local player, fixed for the whole session.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerId(pub String);

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let id = hooks::load_or_create_player_id();
        tracing::info!("Session started for player {}", id);
        PlayerId(id)
    });

    rsx! {
        Router::<Route> {}
    }
}
