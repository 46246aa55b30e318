use dioxus::prelude::*;

use crate::components::Shell;
use crate::pages::{GameRoom, Home, PageNotFound};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/:id")]
    GameRoom { id: String },  // Any single segment is a game id
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_url_surface() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!(
            "/abc123".parse::<Route>().unwrap(),
            Route::GameRoom {
                id: "abc123".to_string()
            }
        );
        assert!(matches!(
            "/abc123/extra".parse::<Route>().unwrap(),
            Route::PageNotFound { .. }
        ));
    }

    #[test]
    fn game_routes_render_back_to_their_path() {
        let route = Route::GameRoom {
            id: "quiet-otter".to_string(),
        };
        assert_eq!(route.to_string(), "/quiet-otter");
        assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
    }
}
