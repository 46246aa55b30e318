mod app_link;
mod board;
mod key_card;
mod layout;
mod sidebar;
mod team_picker;

pub use app_link::AppLink;
pub use board::Board;
pub use key_card::KeyCard;
pub use layout::Shell;
pub use sidebar::Sidebar;
pub use team_picker::TeamPicker;
