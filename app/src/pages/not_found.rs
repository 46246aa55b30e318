use dioxus::prelude::*;

use crate::components::AppLink;
use crate::controller::UrlRequest;
use crate::route::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "max-w-xl mx-auto text-center py-24",
            h1 { class: "text-3xl font-bold text-high mb-4", "Page not found" }
            p { class: "text-low mb-8", "There is nothing at /{path}." }
            AppLink {
                to: UrlRequest::Internal(Route::Home {}),
                class: "controls-primary px-6 py-2 rounded-lg font-semibold",
                "Back to the start"
            }
        }
    }
}
