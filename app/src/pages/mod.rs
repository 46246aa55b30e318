mod game;
mod home;
mod not_found;

pub use game::GameRoom;
pub use home::Home;
pub use not_found::PageNotFound;
