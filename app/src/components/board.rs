use codenames_api::prelude::*;
use dioxus::prelude::*;

use crate::controller::Msg;
use crate::hooks::use_controller;

#[derive(Props, Clone, PartialEq)]
pub struct BoardProps {
    /// Tiles in index order
    pub cells: Vec<Cell>,
    /// Side the local player guesses for
    pub team: Team,
}

#[component]
pub fn Board(props: BoardProps) -> Element {
    let controller = use_controller();

    rsx! {
        div { class: "grid grid-cols-5 gap-2",
            for cell in props.cells.iter().cloned() {
                Tile {
                    key: "{cell.index}",
                    cell: cell,
                    team: props.team,
                    on_pick: move |index: usize| controller.send(Msg::PickWord(index)),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TileProps {
    cell: Cell,
    team: Team,
    on_pick: EventHandler<usize>,
}

#[component]
fn Tile(props: TileProps) -> Element {
    let pickable = props.cell.is_pickable_by(props.team);
    let class = tile_class(&props.cell, props.team);
    let index = props.cell.index;
    let on_pick = props.on_pick;

    rsx! {
        button {
            class: "{class}",
            disabled: !pickable,
            onclick: move |_| {
                if pickable {
                    on_pick.call(index);
                }
            },
            span { class: "font-semibold uppercase tracking-wide text-sm", "{props.cell.word}" }
        }
    }
}

/// CSS classes for a tile as seen by `team`.
pub fn tile_class(cell: &Cell, team: Team) -> String {
    let mut classes = vec!["tile aspect-[3/2] rounded-md flex items-center justify-center p-2 transition-all"];

    match cell.exposed_color() {
        Some(Color::Green) => classes.push("tile-green"),
        Some(Color::Black) => classes.push("tile-black"),
        _ => {
            // A tan reveal only closes the tile to the team that guessed it.
            if cell.a == Exposure::new(true, Color::Tan) {
                classes.push("tile-tan-a");
            }
            if cell.b == Exposure::new(true, Color::Tan) {
                classes.push("tile-tan-b");
            }
        }
    }

    if cell.is_pickable_by(team) {
        classes.push("tile-pickable cursor-pointer");
    } else {
        classes.push("cursor-default");
    }

    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(a: Exposure, b: Exposure) -> Cell {
        Cell {
            index: 0,
            word: "river".to_string(),
            a,
            b,
        }
    }

    #[test]
    fn fresh_tile_is_pickable_for_a_joined_player() {
        let c = cell(Exposure::default(), Exposure::default());
        assert!(tile_class(&c, Team::A).contains("tile-pickable"));
        assert!(!tile_class(&c, Team::NoTeam).contains("tile-pickable"));
    }

    #[test]
    fn exposed_tiles_show_their_color_and_are_closed() {
        let green = cell(Exposure::new(true, Color::Green), Exposure::default());
        let class = tile_class(&green, Team::B);
        assert!(class.contains("tile-green"));
        assert!(!class.contains("tile-pickable"));

        let black = cell(Exposure::default(), Exposure::new(true, Color::Black));
        assert!(tile_class(&black, Team::A).contains("tile-black"));
    }

    #[test]
    fn tan_hint_is_per_marker() {
        let c = cell(Exposure::default(), Exposure::new(true, Color::Tan));
        let for_a = tile_class(&c, Team::A);
        assert!(for_a.contains("tile-tan-b"));
        assert!(!for_a.contains("tile-tan-a"));
        assert!(!for_a.contains("tile-pickable"));
        assert!(tile_class(&c, Team::B).contains("tile-pickable"));
    }
}
