use dioxus::prelude::*;

use crate::controller::{game_id_from_draft, Msg, Page};
use crate::hooks::use_controller;

#[component]
pub fn Home() -> Element {
    let controller = use_controller();
    let ready = match &controller.model().read().page {
        Page::Home { draft } => game_id_from_draft(draft).is_some(),
        _ => false,
    };

    rsx! {
        div { class: "max-w-xl mx-auto text-center py-16",
            h1 { class: "text-5xl font-bold mb-6",
                span { class: "text-green-400", "Codenames" }
                span { class: "text-high", " Green" }
            }

            p { class: "text-xl text-low mb-10",
                "Two teams, one board, one shared goal. "
                "Pick a game id and share the link with everyone at the table."
            }

            form {
                class: "flex gap-3 justify-center",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    controller.send(Msg::SubmitNewGame);
                },
                input {
                    class: "elevated-control rounded px-3 py-2 font-mono text-lg w-64",
                    r#type: "text",
                    placeholder: "game id",
                    autofocus: true,
                    oninput: move |e: FormEvent| controller.send(Msg::DraftChanged(e.value())),
                }
                button {
                    class: "controls-primary px-6 py-2 rounded-lg font-semibold",
                    r#type: "submit",
                    disabled: !ready,
                    "Go"
                }
            }
        }
    }
}
