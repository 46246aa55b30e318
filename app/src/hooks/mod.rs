mod api;
mod player;
mod use_controller;

pub use api::ClientError;
pub use player::load_or_create_player_id;
pub use use_controller::{use_controller, use_controller_provider, Controller};
