//! Wire types shared with the Codenames Green game service.
//!
//! The service owns every game rule that mutates state. This crate only
//! describes the snapshots it returns and the read-only rules a client needs
//! to render them: which tiles are exposed, which are pickable, and who sits
//! on which team.

pub mod request;
pub mod state;

pub mod prelude {
    pub use crate::request::*;
    pub use crate::state::*;
}
