use dioxus::prelude::*;

use crate::components::{Board, Sidebar};
use crate::controller::Page;
use crate::hooks::use_controller;

#[component]
pub fn GameRoom(id: String) -> Element {
    let controller = use_controller();
    let page = controller.model().read().page.clone();

    match page {
        // The route can run ahead of the controller for one event; only draw
        // a board that belongs to this URL.
        Page::GameInProgress {
            id: current,
            game,
            team,
        } if current == id => {
            let cells = game.cells.clone();
            rsx! {
                div { class: "flex flex-col lg:flex-row gap-6",
                    div { class: "flex-1 lg:flex-[2]",
                        Board { cells: cells, team: team }
                    }
                    div { class: "w-full lg:w-80 space-y-4",
                        div { class: "text-low text-sm",
                            "Game "
                            code { class: "text-high", "{current}" }
                        }
                        Sidebar { game: game, team: team }
                    }
                }
            }
        }
        _ => rsx! {
            Loading { id: id }
        },
    }
}

#[component]
fn Loading(id: String) -> Element {
    rsx! {
        div { class: "text-center py-24",
            p { class: "text-gold font-mono text-xl animate-pulse", "..." }
            p { class: "text-low mt-2", "Loading game {id}" }
        }
    }
}
