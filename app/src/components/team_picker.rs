use codenames_api::prelude::*;
use dioxus::prelude::*;

use crate::controller::Msg;
use crate::hooks::use_controller;

#[component]
pub fn TeamPicker(membership: Membership) -> Element {
    let controller = use_controller();

    rsx! {
        div { class: "elevated rounded-lg p-4 elevated-border border space-y-3",
            h3 { class: "text-green-400 font-semibold", "Pick a side" }
            p { class: "text-low text-sm",
                "Each side has its own key card. Your guesses are checked against the other side's card."
            }
            {[Team::A, Team::B].into_iter().map(|team| {
                let label = headcount(membership.count(team));
                rsx! {
                    button {
                        key: "{team}",
                        class: "w-full controls-primary py-2 rounded-lg font-semibold",
                        onclick: move |_| controller.send(Msg::PickTeam(team)),
                        "Join team {team}"
                        span { class: "text-low text-xs ml-2", "({label})" }
                    }
                }
            })}
        }
    }
}

fn headcount(count: usize) -> String {
    match count {
        1 => "1 player".to_string(),
        n => format!("{n} players"),
    }
}

#[cfg(test)]
mod tests {
    use super::headcount;

    #[test]
    fn headcount_labels() {
        assert_eq!(headcount(0), "0 players");
        assert_eq!(headcount(1), "1 player");
        assert_eq!(headcount(4), "4 players");
    }
}
