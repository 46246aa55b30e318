mod cell;
mod game;
mod team;

pub use cell::*;
pub use game::*;
pub use team::*;
