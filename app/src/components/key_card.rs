use codenames_api::prelude::*;
use dioxus::prelude::*;

#[component]
pub fn KeyCard(team: Team, layout: Vec<Color>) -> Element {
    rsx! {
        div { class: "elevated rounded-lg p-4 elevated-border border",
            h3 { class: "text-green-400 font-semibold mb-1", "Team {team} key card" }
            p { class: "text-low text-xs mb-3", "Give clues for the green squares. Keep this card to yourselves." }
            div { class: "grid grid-cols-5 gap-1",
                for (i, color) in layout.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "{key_class(color)}",
                        {color.code()}
                    }
                }
            }
        }
    }
}

fn key_class(color: Color) -> &'static str {
    match color {
        Color::Green => "key key-green aspect-square rounded-sm",
        Color::Black => "key key-black aspect-square rounded-sm",
        Color::Tan => "key key-tan aspect-square rounded-sm",
        Color::Unknown => "key key-unknown aspect-square rounded-sm",
    }
}
