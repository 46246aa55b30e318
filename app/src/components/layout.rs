use dioxus::prelude::*;

use crate::components::AppLink;
use crate::controller::UrlRequest;
use crate::hooks::use_controller_provider;
use crate::route::Route;
use crate::{PlayerId, RULES_URL};

#[component]
pub fn Shell() -> Element {
    let player = use_context::<PlayerId>();
    use_controller_provider(player.0.clone());
    let player_id = player.0;

    rsx! {
        div { class: "min-h-screen flex flex-col",
            style: "background-color: var(--surface-base);",
            // Navigation
            nav { class: "border-b elevated-border sticky top-0 z-50",
                style: "background-color: var(--surface-base);",
                div { class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between items-center h-16",
                        AppLink {
                            to: UrlRequest::Internal(Route::Home {}),
                            class: "text-2xl font-bold text-green-400",
                            "Codenames Green"
                        }
                        AppLink {
                            to: UrlRequest::External(RULES_URL.to_string()),
                            class: "text-mid hover:text-green-300 px-3 py-2 text-sm font-medium transition-colors",
                            "Rules"
                        }
                    }
                }
            }

            // Main content
            main { class: "max-w-6xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8 flex-1",
                Outlet::<Route> {}
            }

            // Footer
            footer { class: "border-t elevated-border py-6",
                div { class: "max-w-6xl mx-auto px-4 text-center text-low text-sm",
                    "Playing as "
                    code { class: "text-green-400", "{player_id}" }
                }
            }
        }
    }
}
